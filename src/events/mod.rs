pub mod form;
pub mod nav;
pub mod pointer;
pub mod scroll;
pub mod sections;

pub use form::ContactView;
pub use nav::NavWiring;
pub use scroll::{BackToTopView, HeaderView, ScrollWiring};
pub use sections::{ProjectsView, SkillsView};
