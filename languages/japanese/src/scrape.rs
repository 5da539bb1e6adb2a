use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

/// A named extraction over one CSS selector.
///
/// A rule that stops matching yields an empty value; the other rules on the
/// page keep working.
pub(crate) struct Rule {
    pub field: &'static str,
    pub selector: LazyLock<Selector>,
}

macro_rules! rule {
    ($field:literal, $css:literal) => {
        $crate::scrape::Rule {
            field: $field,
            selector: ::std::sync::LazyLock::new(|| {
                ::scraper::Selector::parse($css)
                    .expect(concat!("BUG: hardcoded CSS selector '", $css, "' is invalid"))
            }),
        }
    };
}
pub(crate) use rule;

impl Rule {
    pub fn first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        let found = scope.select(&self.selector).next();
        if found.is_none() {
            tracing::debug!(rule = self.field, "Extraction rule matched nothing");
        }
        found
    }

    pub fn all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        scope.select(&self.selector).collect()
    }

    /// Trimmed text of the first match, empty when absent
    pub fn text(&self, scope: ElementRef<'_>) -> String {
        self.first(scope).map(element_text).unwrap_or_default()
    }

    /// Non-empty trimmed texts of every match
    pub fn texts(&self, scope: ElementRef<'_>) -> Vec<String> {
        scope
            .select(&self.selector)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect()
    }

    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        self.selector.matches(element)
    }
}

/// Text content with markup stripped and surrounding whitespace trimmed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Next sibling that is an element, skipping text and comments
pub(crate) fn next_element_sibling<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}
