use crate::content::ContentItem;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("schedule has no movie set")]
    MissingMovie,
}

/// A screening slot: a shared reference to the programmed content plus an
/// owned time string.
///
/// The record does not manage the content's lifetime; the `Arc` target is
/// shared with whoever else holds it.
#[derive(Debug, Default)]
pub struct ScheduleRecord {
    movie: Option<Arc<ContentItem>>,
    time: String,
}

impl ScheduleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_movie(&mut self, movie: Arc<ContentItem>) {
        self.movie = Some(movie);
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn movie(&self) -> Option<&Arc<ContentItem>> {
        self.movie.as_ref()
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// Derive a new record from this one: scalar fields are duplicated,
    /// the movie reference stays shared with the source. After duplication
    /// the two records never alias each other's time; they point at the
    /// same content item until one side reassigns its movie.
    pub fn duplicate(&self) -> ScheduleRecord {
        ScheduleRecord {
            movie: self.movie.clone(),
            time: self.time.clone(),
        }
    }

    /// Textual form, `"Movie: {title}, Time: {time}"`.
    ///
    /// Fails if no movie has been set; an incomplete record is never
    /// rendered with a placeholder title.
    pub fn summary(&self) -> Result<String, ScheduleError> {
        let movie = self.movie.as_ref().ok_or(ScheduleError::MissingMovie)?;
        Ok(format!("Movie: {}, Time: {}", movie.title(), self.time))
    }
}
