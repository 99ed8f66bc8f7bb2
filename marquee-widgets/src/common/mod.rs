pub mod theme;

pub use theme::{DARK_PALETTE, LIGHT_PALETTE, ThemePalette, border_type};
