use crate::constants::{
    CLASS_ACTIVE, DATA_CATEGORY, DATA_FILTER, PROJECTS_GRID_ID, PROJECT_FILTERS_ID,
    SKILLS_GRID_ID, SKILLS_TABS_ID,
};
use crate::core::data::{skill_category, Project, ProjectFilter};
use crate::core::tilt::TiltConfig;
use crate::dom;
use crate::events::pointer::{attach_tilt_cards, TiltCard};
use crate::render;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Value of `attr` on the clicked element or its nearest ancestor.
fn clicked_attr(ev: &web::Event, attr: &str) -> Option<(web::Element, String)> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let el = target.closest(&format!("[{attr}]")).ok()??;
    let value = el.get_attribute(attr)?;
    Some((el, value))
}

fn mark_active(container: &web::Element, attr: &str, selected: &str) {
    for button in dom::query_all(container, &format!("[{attr}]")) {
        let on = button.get_attribute(attr).as_deref() == Some(selected);
        dom::set_class(&button, CLASS_ACTIVE, on);
    }
}

/// Category tabs swapping the skills grid.
pub struct SkillsView {
    listener: Option<EventListener>,
}

impl SkillsView {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let tabs = dom::element_by_id(document, SKILLS_TABS_ID)?;
        let grid = dom::element_by_id(document, SKILLS_GRID_ID)?;
        let container = tabs.clone();
        let listener = EventListener::new(&tabs, "click", move |ev| {
            let Some((_, key)) = clicked_attr(ev, DATA_CATEGORY) else {
                return;
            };
            let Some(category) = skill_category(&key) else {
                log::warn!("[skills] unknown category {key}");
                return;
            };
            mark_active(&container, DATA_CATEGORY, &key);
            grid.set_inner_html(&render::skills_grid_markup(category));
        });
        Some(Self {
            listener: Some(listener),
        })
    }

    pub fn unmount(&mut self) {
        self.listener = None;
    }
}

/// Project filter buttons plus the tilt cards of the visible projects.
pub struct ProjectsView {
    cards: Rc<RefCell<Vec<TiltCard>>>,
    listener: Option<EventListener>,
}

impl ProjectsView {
    pub fn mount(
        document: &web::Document,
        projects: &'static [Project],
        tilt: TiltConfig,
    ) -> Option<Self> {
        let filters = dom::element_by_id(document, PROJECT_FILTERS_ID)?;
        let grid = dom::element_by_id(document, PROJECTS_GRID_ID)?;
        let cards = Rc::new(RefCell::new(attach_tilt_cards(&grid, &tilt)));

        let container = filters.clone();
        let cards_for_filter = cards.clone();
        let listener = EventListener::new(&filters, "click", move |ev| {
            let Some((_, key)) = clicked_attr(ev, DATA_FILTER) else {
                return;
            };
            let Some(filter) = ProjectFilter::from_key(&key) else {
                return;
            };
            mark_active(&container, DATA_FILTER, filter.key());
            // Old cards' listeners go with their elements.
            cards_for_filter.borrow_mut().clear();
            grid.set_inner_html(&render::projects_grid_markup(projects, filter));
            *cards_for_filter.borrow_mut() = attach_tilt_cards(&grid, &tilt);
            log::debug!("[projects] filter = {}", filter.key());
        });
        Some(Self {
            cards,
            listener: Some(listener),
        })
    }

    pub fn unmount(&mut self) {
        self.listener = None;
        self.cards.borrow_mut().clear();
    }
}
