pub mod button;
pub mod checkbox;
pub mod common;
pub mod error;
pub mod factory;

pub use button::Button;
pub use checkbox::Checkbox;
pub use common::*;
pub use error::ErrorWidget;
pub use factory::{DarkFactory, LightFactory, default_registry};
