pub mod booking;
pub mod config;
pub mod content;
pub mod registry;
pub mod schedule;
pub mod widget;

pub use booking::{BookingBuilder, BookingRecord};
pub use config::{ConfigError, ConfigFile, UiSection, VenueConfig, VenueSection};
pub use content::{ContentCreator, ContentItem, ContentKind, PremiumCreator, StandardCreator};
pub use registry::ThemeRegistry;
pub use schedule::{ScheduleError, ScheduleRecord};
pub use widget::{Theme, Widget, WidgetFactory};
