//! Canonical supply categories and the bilingual label classifier.

use serde::{Deserialize, Serialize};

/// One of the stock classes tracked by the facility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Disinfectant,
    Degreaser,
    Bleach,
}

/// Keyword table in match priority order. A label belongs to the first
/// category with a keyword contained in it.
const KEYWORDS: [(Category, &[&str]); 3] = [
    (Category::Disinfectant, &["disinfectant", "desinfectante"]),
    (Category::Degreaser, &["degreaser", "desengrasante"]),
    (Category::Bleach, &["bleach", "cloro"]),
];

impl Category {
    /// Stable lowercase key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Category::Disinfectant => "disinfectant",
            Category::Degreaser => "degreaser",
            Category::Bleach => "bleach",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

/// Maps a free-text supply label to its category.
///
/// The label is lower-cased and trimmed, then matched by substring against
/// the English and Spanish keywords of each category. `None` means the label
/// is unclassified; an absent label behaves like the empty string.
///
/// ```rust
/// use engine::{Category, classify};
///
/// assert_eq!(classify(Some(" Desinfectante ")), Some(Category::Disinfectant));
/// assert_eq!(classify(Some("Cloro 5%")), Some(Category::Bleach));
/// assert_eq!(classify(Some("wax")), None);
/// assert_eq!(classify(None), None);
/// ```
#[must_use]
pub fn classify(raw_name: Option<&str>) -> Option<Category> {
    let key = raw_name.map(|name| name.trim().to_lowercase()).unwrap_or_default();
    if key.is_empty() {
        return None;
    }

    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|word| key.contains(word)))
        .map(|(category, _)| *category)
}
