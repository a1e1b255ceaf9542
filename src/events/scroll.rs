use crate::constants::{BACK_TO_TOP_ID, CLASS_SCROLLED, CLASS_VISIBLE, HEADER_ID};
use crate::core::scroll::{ScrollFlag, ScrollMonitor, ScrollThresholds, Subscription};
use crate::dom;
use gloo::events::EventListener;
use web_sys as web;

/// Window `scroll` listener feeding a [`ScrollMonitor`].
pub struct ScrollWiring {
    monitor: ScrollMonitor,
    listener: Option<EventListener>,
}

impl ScrollWiring {
    pub fn attach(window: &web::Window) -> Self {
        let monitor = ScrollMonitor::new();
        monitor.publish(window.scroll_y().unwrap_or(0.0));
        let publish_to = monitor.clone();
        let listener = EventListener::new(window, "scroll", move |_| {
            publish_to.publish(dom::current_scroll_y());
        });
        Self {
            monitor,
            listener: Some(listener),
        }
    }

    pub fn monitor(&self) -> &ScrollMonitor {
        &self.monitor
    }

    pub fn detach(&mut self) {
        self.listener = None;
    }
}

/// Toggles `class` on `el` whenever `flag` flips.
fn subscribe_class_toggle(
    monitor: &ScrollMonitor,
    el: web::Element,
    mut flag: ScrollFlag,
    class: &'static str,
) -> Subscription {
    dom::set_class(&el, class, false);
    monitor.subscribe(move |offset| {
        if let Some(on) = flag.observe(offset) {
            dom::set_class(&el, class, on);
        }
    })
}

/// Sticky header that gains `scrolled` past its threshold.
pub struct HeaderView {
    subscription: Subscription,
}

impl HeaderView {
    pub fn mount(
        document: &web::Document,
        monitor: &ScrollMonitor,
        thresholds: ScrollThresholds,
    ) -> Option<Self> {
        let header = dom::element_by_id(document, HEADER_ID)?;
        Some(Self {
            subscription: subscribe_class_toggle(
                monitor,
                header,
                ScrollFlag::header(thresholds),
                CLASS_SCROLLED,
            ),
        })
    }

    pub fn unmount(&mut self) {
        self.subscription.cancel();
    }
}

/// Footer button that appears past its threshold and scrolls home on click.
pub struct BackToTopView {
    subscription: Subscription,
    click: Option<EventListener>,
}

impl BackToTopView {
    pub fn mount(
        document: &web::Document,
        monitor: &ScrollMonitor,
        thresholds: ScrollThresholds,
    ) -> Option<Self> {
        let button = dom::element_by_id(document, BACK_TO_TOP_ID)?;
        let click = EventListener::new(&button, "click", |_| {
            log::debug!("[scroll] back to top");
            dom::smooth_scroll_to(0.0);
        });
        Some(Self {
            subscription: subscribe_class_toggle(
                monitor,
                button,
                ScrollFlag::back_to_top(thresholds),
                CLASS_VISIBLE,
            ),
            click: Some(click),
        })
    }

    pub fn unmount(&mut self) {
        self.subscription.cancel();
        self.click = None;
    }
}
