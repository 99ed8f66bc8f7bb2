/// The closed set of content formats the venue programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Standard,
    PremiumFormat,
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Standard => "Standard",
            ContentKind::PremiumFormat => "PremiumFormat",
        }
    }
}

/// A programmed content item. Immutable once created; construct one through
/// a [`ContentCreator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    title: String,
    kind: ContentKind,
}

impl ContentItem {
    fn new(kind: ContentKind, title: &str) -> Self {
        Self {
            title: title.to_string(),
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Creates content items of one fixed kind.
///
/// Titles are accepted verbatim, the empty string included. Supporting a new
/// format means adding a [`ContentKind`] case and a creator for it; existing
/// creators stay untouched.
pub trait ContentCreator {
    fn create_item(&self, title: &str) -> ContentItem;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCreator;

impl ContentCreator for StandardCreator {
    fn create_item(&self, title: &str) -> ContentItem {
        ContentItem::new(ContentKind::Standard, title)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PremiumCreator;

impl ContentCreator for PremiumCreator {
    fn create_item(&self, title: &str) -> ContentItem {
        ContentItem::new(ContentKind::PremiumFormat, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_creator_kind() {
        let item = StandardCreator.create_item("Inception");
        assert_eq!(item.kind(), ContentKind::Standard);
        assert_eq!(item.kind_label(), "Standard");
        assert_eq!(item.title(), "Inception");
    }

    #[test]
    fn test_premium_creator_kind() {
        let item = PremiumCreator.create_item("Inception");
        assert_eq!(item.kind(), ContentKind::PremiumFormat);
        assert_eq!(item.kind_label(), "PremiumFormat");
        assert_eq!(item.title(), "Inception");
    }

    #[test]
    fn test_empty_title_accepted() {
        let item = StandardCreator.create_item("");
        assert_eq!(item.title(), "");
        assert_eq!(item.kind(), ContentKind::Standard);
    }

    #[test]
    fn test_creators_as_trait_objects() {
        let creators: Vec<Box<dyn ContentCreator>> =
            vec![Box::new(StandardCreator), Box::new(PremiumCreator)];
        let labels: Vec<&str> = creators
            .iter()
            .map(|c| c.create_item("Dune").kind_label())
            .collect();
        assert_eq!(labels, vec!["Standard", "PremiumFormat"]);
    }
}
