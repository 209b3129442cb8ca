use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::speech::LanguageCode;

/// A phrase category as stored in the catalogue document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// A single translation of a phrase into one catalogue language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// Native-script phrase text
    pub text: String,
    /// Human-readable pronunciation guide, for display only
    pub phonetic: String,
    /// Synthesis-tuned respelling, present only where the speech backend
    /// has no native voice and the plain text renders poorly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts_pronunciation: Option<String>,
}

/// A phrase with its category memberships and all translations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phrase {
    pub id: String,
    pub categories: Vec<String>,
    pub translations: BTreeMap<LanguageCode, Translation>,
}

/// The complete catalogue as read from the backing document.
/// Insertion order of categories and phrases is display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    pub categories: Vec<Category>,
    pub phrases: Vec<Phrase>,
}

/// All phrases plus their count; `total` always equals `phrases.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseList {
    pub total: usize,
    pub phrases: Vec<Phrase>,
}

impl Phrase {
    /// Whether this phrase belongs to the given category.
    pub fn in_category(&self, category_id: &str) -> bool {
        self.categories.iter().any(|c| c == category_id)
    }
}
