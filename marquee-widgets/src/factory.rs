use marquee_core::{Theme, ThemeRegistry, Widget, WidgetFactory, register_theme};

use crate::{Button, Checkbox};

/// Factory for the dark widget family
#[derive(Debug, Default, Clone, Copy)]
pub struct DarkFactory;

impl WidgetFactory for DarkFactory {
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn create_button(&self) -> Box<dyn Widget> {
        Box::new(Button::new(Theme::Dark))
    }

    fn create_checkbox(&self) -> Box<dyn Widget> {
        Box::new(Checkbox::new(Theme::Dark))
    }
}

/// Factory for the light widget family
#[derive(Debug, Default, Clone, Copy)]
pub struct LightFactory;

impl WidgetFactory for LightFactory {
    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn create_button(&self) -> Box<dyn Widget> {
        Box::new(Button::new(Theme::Light))
    }

    fn create_checkbox(&self) -> Box<dyn Widget> {
        Box::new(Checkbox::new(Theme::Light))
    }
}

/// Registry with both stock themes wired in.
pub fn default_registry() -> ThemeRegistry {
    let mut registry = ThemeRegistry::new();
    register_theme!(registry, "dark", DarkFactory);
    register_theme!(registry, "light", LightFactory);
    registry
}
