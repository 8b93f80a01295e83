//! Catalog items and the matching rules that decide their visibility.

use serde::{Deserialize, Serialize};

/// Category selector value that matches every item.
pub const ALL_CATEGORIES: &str = "all";

/// One catalog entry as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Single tag used for category filtering
    pub category: String,
    /// Free-text keyword blob; empty when the page supplies none
    #[serde(default)]
    pub keywords: String,
    /// Rendered text content of the card
    pub display_text: String,
    /// External navigation target of the item's primary action
    #[serde(default)]
    pub link: Option<String>,
    /// Derived state, recomputed by [`crate::CatalogFilter`]
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl Item {
    pub fn new(category: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            keywords: String::new(),
            display_text: display_text.into(),
            link: None,
            visible: true,
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn has_link(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// `true` when `category` is [`ALL_CATEGORIES`] or equals this item's tag.
    pub fn matches_category(&self, category: &str) -> bool {
        category.eq_ignore_ascii_case(ALL_CATEGORIES)
            || self.category.to_lowercase() == category.to_lowercase()
    }

    /// `true` when `term` is empty or occurs in the text or the keywords.
    ///
    /// `term` must already be lowercased; [`crate::FilterState`] stores it that way.
    pub fn matches_term(&self, term: &str) -> bool {
        term.is_empty()
            || self.display_text.to_lowercase().contains(term)
            || self.keywords.to_lowercase().contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_tool() -> Item {
        Item::new("tools", "PDF Merger - combine documents").with_keywords("pdf merge join")
    }

    #[test]
    fn all_matches_every_category() {
        assert!(pdf_tool().matches_category("all"));
        assert!(pdf_tool().matches_category("ALL"));
        assert!(Item::new("", "untagged").matches_category("all"));
    }

    #[test]
    fn category_must_match_exactly_ignoring_case() {
        let item = pdf_tool();
        assert!(item.matches_category("tools"));
        assert!(item.matches_category("Tools"));
        assert!(!item.matches_category("tool"));
        assert!(!item.matches_category("docs"));
    }

    #[test]
    fn empty_term_matches() {
        assert!(pdf_tool().matches_term(""));
    }

    #[test]
    fn term_matches_text_or_keywords() {
        let item = pdf_tool();
        assert!(item.matches_term("merger"));
        assert!(item.matches_term("join"));
        assert!(!item.matches_term("spreadsheet"));
    }

    #[test]
    fn text_is_case_insensitive() {
        let item = Item::new("docs", "QuickStart Guide").with_keywords("Onboarding");
        assert!(item.matches_term("quickstart"));
        assert!(item.matches_term("onboarding"));
    }

    #[test]
    fn missing_keywords_never_match_alone() {
        let item = Item::new("tools", "Converter");
        assert!(item.keywords.is_empty());
        assert!(!item.matches_term("pdf"));
    }

    #[test]
    fn link_presence() {
        assert!(!pdf_tool().has_link());
        assert!(pdf_tool().with_link("https://example.org").has_link());
        assert!(!pdf_tool().with_link("").has_link());
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let item: Item =
            serde_json::from_str(r#"{ "category": "tools", "display_text": "Zip" }"#).unwrap();
        assert!(item.visible);
        assert!(item.keywords.is_empty());
        assert_eq!(item.link, None);
    }
}
