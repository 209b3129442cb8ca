use serde::{Deserialize, Serialize};

/// The closed set of catalogue languages, keyed by ISO 639 code on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "af")]
    Afrikaans,
    #[serde(rename = "zu")]
    Zulu,
    #[serde(rename = "xh")]
    Xhosa,
    #[serde(rename = "nso")]
    Sepedi,
}

impl LanguageCode {
    /// Every catalogue language; a valid phrase carries all of them.
    pub fn all() -> &'static [LanguageCode] {
        &[
            LanguageCode::English,
            LanguageCode::Afrikaans,
            LanguageCode::Zulu,
            LanguageCode::Xhosa,
            LanguageCode::Sepedi,
        ]
    }

    /// Get the wire code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Afrikaans => "af",
            LanguageCode::Zulu => "zu",
            LanguageCode::Xhosa => "xh",
            LanguageCode::Sepedi => "nso",
        }
    }

    /// Parse a wire code; anything outside the catalogue set is rejected.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(LanguageCode::English),
            "af" => Some(LanguageCode::Afrikaans),
            "zu" => Some(LanguageCode::Zulu),
            "xh" => Some(LanguageCode::Xhosa),
            "nso" => Some(LanguageCode::Sepedi),
            _ => None,
        }
    }

    /// The locale handed to the speech backend. English and Afrikaans have
    /// native voices; the backend has none for isiZulu, isiXhosa, or Sepedi,
    /// so those synthesize under the Afrikaans locale. Hand-maintained:
    /// backend voice support changes independently of the catalogue.
    pub fn synthesis_locale(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Afrikaans => "af",
            LanguageCode::Zulu | LanguageCode::Xhosa | LanguageCode::Sepedi => "af",
        }
    }

    /// Whether the speech backend has a native voice for this language.
    pub fn has_native_voice(&self) -> bool {
        matches!(self, LanguageCode::English | LanguageCode::Afrikaans)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
