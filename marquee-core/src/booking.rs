use std::fmt;

/// A finalized seat booking. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    movie_title: String,
    seat_number: String,
    snack_combo: String,
}

impl BookingRecord {
    pub fn movie_title(&self) -> &str {
        &self.movie_title
    }

    pub fn seat_number(&self) -> &str {
        &self.seat_number
    }

    pub fn snack_combo(&self) -> &str {
        &self.snack_combo
    }
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Movie: {}, Seat: {}, Snacks: {}",
            self.movie_title, self.seat_number, self.snack_combo
        )
    }
}

/// Incremental builder for [`BookingRecord`].
///
/// Setters chain in any order or subset; unset fields stay empty. `build`
/// snapshots the current state and can be called repeatedly; records built
/// earlier never see later mutations.
#[derive(Debug, Default)]
pub struct BookingBuilder {
    movie_title: String,
    seat_number: String,
    snack_combo: String,
}

impl BookingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_movie_title(&mut self, movie_title: impl Into<String>) -> &mut Self {
        self.movie_title = movie_title.into();
        self
    }

    pub fn set_seat_number(&mut self, seat_number: impl Into<String>) -> &mut Self {
        self.seat_number = seat_number.into();
        self
    }

    pub fn set_snack_combo(&mut self, snack_combo: impl Into<String>) -> &mut Self {
        self.snack_combo = snack_combo.into();
        self
    }

    pub fn build(&self) -> BookingRecord {
        BookingRecord {
            movie_title: self.movie_title.clone(),
            seat_number: self.seat_number.clone(),
            snack_combo: self.snack_combo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_order_does_not_matter() {
        let a = BookingBuilder::new()
            .set_seat_number("A1")
            .set_movie_title("Inception")
            .build();
        let b = BookingBuilder::new()
            .set_movie_title("Inception")
            .set_seat_number("A1")
            .build();

        assert_eq!(a, b);
        assert_eq!(a.movie_title(), "Inception");
        assert_eq!(a.seat_number(), "A1");
        assert_eq!(a.snack_combo(), "");
    }

    #[test]
    fn test_unset_fields_default_to_empty() {
        let record = BookingBuilder::new().build();
        assert_eq!(record.movie_title(), "");
        assert_eq!(record.seat_number(), "");
        assert_eq!(record.snack_combo(), "");
    }

    #[test]
    fn test_build_snapshots_are_independent() {
        let mut builder = BookingBuilder::new();
        builder.set_movie_title("Inception").set_seat_number("A1");
        let first = builder.build();

        builder.set_seat_number("B7");
        let second = builder.build();

        assert_eq!(first.seat_number(), "A1");
        assert_eq!(second.seat_number(), "B7");
        assert_eq!(first.movie_title(), second.movie_title());
    }

    #[test]
    fn test_display_format() {
        let record = BookingBuilder::new()
            .set_movie_title("Inception")
            .set_seat_number("A1")
            .set_snack_combo("Popcorn and Soda")
            .build();
        assert_eq!(
            record.to_string(),
            "Movie: Inception, Seat: A1, Snacks: Popcorn and Soda"
        );
    }
}
