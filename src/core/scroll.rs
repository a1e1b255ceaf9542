use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::constants::{
    BACK_TO_TOP_THRESHOLD_PX, HEADER_SCROLLED_THRESHOLD_PX, NAV_SCROLL_PADDING_PX,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub header_px: f64,
    pub back_to_top_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            header_px: HEADER_SCROLLED_THRESHOLD_PX,
            back_to_top_px: BACK_TO_TOP_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub header_scrolled: bool,
    pub show_back_to_top: bool,
}

impl ScrollFlags {
    pub fn from_offset(offset: f64, thresholds: &ScrollThresholds) -> Self {
        Self {
            header_scrolled: offset > thresholds.header_px,
            show_back_to_top: offset > thresholds.back_to_top_px,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FlagKind {
    Header,
    BackToTop,
}

/// One of the [`ScrollFlags`], tracked across offsets so a view only hears
/// about flips. No hysteresis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFlag {
    thresholds: ScrollThresholds,
    kind: FlagKind,
    active: bool,
}

impl ScrollFlag {
    pub fn header(thresholds: ScrollThresholds) -> Self {
        Self::new(thresholds, FlagKind::Header)
    }

    pub fn back_to_top(thresholds: ScrollThresholds) -> Self {
        Self::new(thresholds, FlagKind::BackToTop)
    }

    fn new(thresholds: ScrollThresholds, kind: FlagKind) -> Self {
        Self {
            thresholds,
            kind,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed an offset; returns the new value only when it flipped.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let flags = ScrollFlags::from_offset(offset, &self.thresholds);
        let next = match self.kind {
            FlagKind::Header => flags.header_scrolled,
            FlagKind::BackToTop => flags.show_back_to_top,
        };
        if next == self.active {
            return None;
        }
        self.active = next;
        Some(next)
    }
}

/// Document offset to scroll to so `element_top` lands just below a fixed
/// header. `element_top` is relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[inline]
pub fn anchor_scroll_target(element_top: f64, page_offset: f64, header_height: f64) -> f64 {
    element_top + page_offset - header_height - NAV_SCROLL_PADDING_PX
}

type Observer = Rc<RefCell<dyn FnMut(f64)>>;

struct Registry {
    next_id: u64,
    last_offset: f64,
    observers: SmallVec<[(u64, Observer); 4]>,
}

/// Fan-out of vertical scroll offsets to the views that care about them.
///
/// Views subscribe while mounted and hold the returned [`Subscription`];
/// dropping it deregisters the observer.
#[derive(Clone)]
pub struct ScrollMonitor {
    registry: Rc<RefCell<Registry>>,
}

impl ScrollMonitor {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                last_offset: 0.0,
                observers: SmallVec::new(),
            })),
        }
    }

    pub fn last_offset(&self) -> f64 {
        self.registry.borrow().last_offset
    }

    pub fn observer_count(&self) -> usize {
        self.registry.borrow().observers.len()
    }

    /// Register `observer`. It is called at once with the last published
    /// offset so a view mounted mid-page starts in the right state.
    pub fn subscribe(&self, observer: impl FnMut(f64) + 'static) -> Subscription {
        let observer: Observer = Rc::new(RefCell::new(observer));
        let (id, offset) = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.observers.push((id, observer.clone()));
            (id, reg.last_offset)
        };
        (&mut *observer.borrow_mut())(offset);
        Subscription {
            id,
            registry: Some(Rc::downgrade(&self.registry)),
        }
    }

    /// Notify every current observer of a new offset.
    pub fn publish(&self, offset: f64) {
        // Snapshot first so observers may (un)subscribe while being notified.
        let snapshot: SmallVec<[(u64, Observer); 4]> = {
            let mut reg = self.registry.borrow_mut();
            reg.last_offset = offset;
            reg.observers.iter().cloned().collect()
        };
        for (id, observer) in snapshot {
            let still_registered = self
                .registry
                .borrow()
                .observers
                .iter()
                .any(|(oid, _)| *oid == id);
            if still_registered {
                if let Ok(mut f) = observer.try_borrow_mut() {
                    (&mut *f)(offset);
                }
            }
        }
    }
}

impl Default for ScrollMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped registration in a [`ScrollMonitor`].
pub struct Subscription {
    id: u64,
    registry: Option<Weak<RefCell<Registry>>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        let Some(reg) = self.registry.as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        let registered = reg.borrow().observers.iter().any(|(id, _)| *id == self.id);
        registered
    }

    /// Deregister now. Calling again, or dropping afterwards, is a no-op.
    pub fn cancel(&mut self) {
        let Some(weak) = self.registry.take() else {
            return;
        };
        if let Some(reg) = weak.upgrade() {
            let removed = {
                let mut reg = reg.borrow_mut();
                let pos = reg.observers.iter().position(|(id, _)| *id == self.id);
                pos.map(|i| reg.observers.remove(i))
            };
            // Release the closure outside the borrow; it may own other subscriptions.
            drop(removed);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
