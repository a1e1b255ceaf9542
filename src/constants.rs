// DOM hooks shared by the markup builders and the browser wiring.
// Markup in `render.rs` emits these ids and classes; the event wiring looks
// them up again after mount.

// Mount point provided by index.html
pub const APP_ROOT_ID: &str = "app";

// Header / navigation
pub const HEADER_ID: &str = "site-header";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const HAMBURGER_ID: &str = "hamburger";

// Hero typing
pub const HERO_TITLE_TEXT_ID: &str = "hero-title-text";
pub const HERO_CURSOR_ID: &str = "hero-cursor";

// Skills
pub const SKILLS_TABS_ID: &str = "skills-tabs";
pub const SKILLS_GRID_ID: &str = "skills-grid";

// Projects
pub const PROJECT_FILTERS_ID: &str = "project-filters";
pub const PROJECTS_GRID_ID: &str = "projects-grid";
pub const TILT_CARD_SELECTOR: &str = ".tilt-card-premium";
pub const TILT_GLOSS_SELECTOR: &str = ".tilt-card-gloss";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_RESULT_ID: &str = "form-result";
pub const SUBMIT_BUTTON_ID: &str = "contact-submit";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_LABEL_SENDING: &str = "Sending...";

// Footer
pub const BACK_TO_TOP_ID: &str = "back-to-top";

// Stateful CSS classes
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_BLINK: &str = "blink";
pub const CLASS_ERROR: &str = "error";

// Data attributes carrying the selection key on tab/filter buttons
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_FILTER: &str = "data-filter";

/// Error span id for a form field, e.g. `name-error`.
#[inline]
pub fn field_error_id(field_key: &str) -> String {
    format!("{field_key}-error")
}
