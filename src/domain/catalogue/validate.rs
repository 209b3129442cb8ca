use super::model::Catalogue;
use crate::domain::speech::LanguageCode;
use std::collections::HashSet;

/// Outcome of a catalogue integrity check. Errors mark content that breaks
/// the data contract; warnings mark content that is legal but suspicious.
/// Validation never blocks startup.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a loaded catalogue against the data contract: unique ids, complete
/// translations, no empty or placeholder fields, no dangling category refs.
pub fn validate(catalogue: &Catalogue) -> ValidationReport {
    let mut report = ValidationReport::default();

    let placeholder = regex::Regex::new(r"(?i)^(todo|tbd|fixme)$").unwrap();

    let mut category_ids = HashSet::new();
    for category in &catalogue.categories {
        if !category_ids.insert(category.id.as_str()) {
            report
                .errors
                .push(format!("duplicate category id: {}", category.id));
        }
    }

    let mut referenced_categories = HashSet::new();
    let mut phrase_ids = HashSet::new();

    for phrase in &catalogue.phrases {
        if !phrase_ids.insert(phrase.id.as_str()) {
            report
                .errors
                .push(format!("duplicate phrase id: {}", phrase.id));
        }

        for category_id in &phrase.categories {
            referenced_categories.insert(category_id.as_str());
            if !category_ids.contains(category_id.as_str()) {
                report.errors.push(format!(
                    "phrase {} references unknown category: {}",
                    phrase.id, category_id
                ));
            }
        }

        for language in LanguageCode::all() {
            match phrase.translations.get(language) {
                None => {
                    report.errors.push(format!(
                        "phrase {} is missing the {} translation",
                        phrase.id, language
                    ));
                }
                Some(translation) => {
                    if translation.text.trim().is_empty() {
                        report.errors.push(format!(
                            "phrase {} has empty {} text",
                            phrase.id, language
                        ));
                    }
                    if translation.phonetic.trim().is_empty() {
                        report.errors.push(format!(
                            "phrase {} has empty {} phonetic guide",
                            phrase.id, language
                        ));
                    } else if placeholder.is_match(translation.phonetic.trim()) {
                        report.errors.push(format!(
                            "phrase {} has placeholder {} phonetic guide: {}",
                            phrase.id, language, translation.phonetic
                        ));
                    }
                    if translation.tts_pronunciation.is_some() && language.has_native_voice() {
                        report.warnings.push(format!(
                            "phrase {} carries a tts_pronunciation for {}, which has a native voice and never uses it",
                            phrase.id, language
                        ));
                    }
                }
            }
        }
    }

    for category in &catalogue.categories {
        if !referenced_categories.contains(category.id.as_str()) {
            report.warnings.push(format!(
                "category {} is not referenced by any phrase",
                category.id
            ));
        }
    }

    report
}
