use crate::WidgetFactory;
use std::collections::HashMap;

/// Lookup table from theme key to widget factory.
pub struct ThemeRegistry {
    factories: HashMap<String, Box<dyn WidgetFactory>>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, factory: Box<dyn WidgetFactory>) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn get(&self, name: &str) -> Option<&dyn WidgetFactory> {
        self.factories.get(name).map(|f| f.as_ref())
    }

    pub fn themes(&self) -> Vec<&String> {
        self.factories.keys().collect()
    }
}

#[macro_export]
macro_rules! register_theme {
    ($registry:expr, $name:expr, $factory_type:ty) => {
        $registry.register($name, Box::new(<$factory_type>::default()));
    };
}
