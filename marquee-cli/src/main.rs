// marquee-cli/src/main.rs
use marquee_core::{
    BookingBuilder, ConfigFile, ContentCreator, PremiumCreator, ScheduleRecord, StandardCreator,
    Theme, VenueConfig, Widget,
};
use marquee_widgets::{ErrorWidget, default_registry};
use ratatui::{buffer::Buffer, layout::Rect};
use std::sync::Arc;

fn print_buffer(buf: &Buffer) {
    for y in buf.area.top()..buf.area.bottom() {
        let line: String = (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect();
        println!("{line}");
    }
}

fn render_once(widget: &mut dyn Widget, area: Rect) {
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    print_buffer(&buf);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load config
    let config = ConfigFile::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using default.", e);
        ConfigFile::default()
    });

    // Seed the process-wide venue settings from the file
    config.apply();
    {
        let venue = VenueConfig::instance().read().unwrap();
        println!("Venue: {}, Screens: {}", venue.name(), venue.screen_count());
    }

    // One content item per creator
    let feature = StandardCreator.create_item("Inception");
    let premiere = PremiumCreator.create_item("Dune: Part Two");
    println!("Now showing: {} [{}]", feature.title(), feature.kind_label());
    println!("Now showing: {} [{}]", premiere.title(), premiere.kind_label());

    // Widgets for the configured theme
    let registry = default_registry();
    let area = Rect::new(0, 0, 30, 3);
    match registry.get(&config.ui.theme) {
        Some(factory) => {
            render_once(factory.create_button().as_mut(), area);
            render_once(factory.create_checkbox().as_mut(), area);
        }
        None => {
            let available = registry
                .themes()
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            eprintln!(
                "Warning: Unknown theme '{}' in config. Available: {}",
                config.ui.theme, available
            );
            let mut widget = ErrorWidget::config_error(
                Theme::Dark,
                format!("Unknown theme '{}'", config.ui.theme),
            );
            render_once(&mut widget, Rect::new(0, 0, 40, 3));
        }
    }

    // A booking built step by step
    let booking = BookingBuilder::new()
        .set_movie_title("Inception")
        .set_seat_number("A1")
        .set_snack_combo("Popcorn and Soda")
        .build();
    println!("{booking}");

    // A schedule template and a derived evening slot
    let feature = Arc::new(feature);
    let mut template = ScheduleRecord::new();
    template.set_time("18:00");
    template.set_movie(Arc::clone(&feature));

    let mut evening = template.duplicate();
    evening.set_time("21:00");

    println!("{}", template.summary()?);
    println!("{}", evening.summary()?);

    Ok(())
}
