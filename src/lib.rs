#![cfg(target_arch = "wasm32")]
use crate::core::data::{PERSONAL_INFO, PROJECTS};
use crate::core::form::{SubmitTiming, ValidationRules};
use crate::core::scroll::ScrollThresholds;
use crate::core::tilt::TiltConfig;
use crate::core::typing::TypingTiming;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod animate;
mod constants;
mod core;
mod dom;
mod events;
mod input;
mod overlay;
mod render;

/// Everything a mounted page owns: listeners, subscriptions and timers.
struct Page {
    scroll: events::ScrollWiring,
    header: Option<events::HeaderView>,
    back_to_top: Option<events::BackToTopView>,
    nav: events::NavWiring,
    hero: Option<animate::TypingDriver>,
    skills: Option<events::SkillsView>,
    projects: Option<events::ProjectsView>,
    contact: Option<events::ContactView>,
}

impl Page {
    fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .get_element_by_id(constants::APP_ROOT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::APP_ROOT_ID))?;
        root.set_inner_html(&render::page_markup(dom::current_year()));

        let thresholds = ScrollThresholds::default();
        let scroll = events::ScrollWiring::attach(window);
        let header = events::HeaderView::mount(document, scroll.monitor(), thresholds);
        let back_to_top =
            events::BackToTopView::mount(document, scroll.monitor(), thresholds);
        let nav = events::NavWiring::attach(document, &root);
        let hero =
            animate::TypingDriver::mount(document, PERSONAL_INFO.title, TypingTiming::default());
        let skills = events::SkillsView::mount(document);
        let projects = events::ProjectsView::mount(document, PROJECTS, TiltConfig::default());
        let contact = events::ContactView::mount(
            document,
            ValidationRules::default(),
            SubmitTiming::default(),
        )?;

        Ok(Self {
            scroll,
            header,
            back_to_top,
            nav,
            hero,
            skills,
            projects,
            contact,
        })
    }

    /// Release every listener and timer. Safe to call more than once.
    fn teardown(&mut self) {
        self.scroll.detach();
        if let Some(v) = self.header.as_mut() {
            v.unmount();
        }
        if let Some(v) = self.back_to_top.as_mut() {
            v.unmount();
        }
        self.nav.detach();
        if let Some(v) = self.hero.as_ref() {
            v.stop();
        }
        if let Some(v) = self.skills.as_mut() {
            v.unmount();
        }
        if let Some(v) = self.projects.as_mut() {
            v.unmount();
        }
        if let Some(v) = self.contact.as_mut() {
            v.unmount();
        }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.teardown();
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    mount();
    Ok(())
}

/// Render the page into `#app` and wire it up, replacing any earlier mount.
#[wasm_bindgen]
pub fn mount() {
    unmount();
    if let Err(e) = init() {
        log::error!("mount error: {:?}", e);
    }
}

/// Tear down the mounted page. Does nothing when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if let Some(mut page) = page {
        page.teardown();
        log::info!("page unmounted");
    }
}

/// Retype the hero title with new text.
#[wasm_bindgen]
pub fn set_hero_title(text: String) {
    PAGE.with(|p| {
        if let Some(hero) = p.borrow().as_ref().and_then(|page| page.hero.as_ref()) {
            hero.restart(Some(text));
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page = Page::mount(&window, &document)?;
    log::info!(
        "page mounted: header={} back_to_top={} hero={} projects={} contact={}",
        page.header.is_some(),
        page.back_to_top.is_some(),
        page.hero.is_some(),
        page.projects.is_some(),
        page.contact.is_some()
    );
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}
