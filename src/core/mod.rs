pub mod constants;
pub mod data;
pub mod form;
pub mod scroll;
pub mod tilt;
pub mod typing;

pub use constants::*;
