use super::error::SpeechServiceError;
use super::language::LanguageCode;
use crate::domain::catalogue::{CatalogueService, CatalogueServiceApi, Phrase};
use crate::infrastructure::repositories::SynthesisRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// What the synthesis gateway is asked to speak: the resolved text and the
/// backend locale it should be voiced under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechInput {
    pub text: String,
    pub synthesis_locale: &'static str,
}

/// Resolve a (phrase, language) pair to the text handed to the speech
/// backend. Languages without a native voice synthesize under the fallback
/// locale and prefer the translation's tuned respelling when one exists;
/// natively-voiced languages always speak the plain text.
pub fn resolve_speech_input(
    phrase: &Phrase,
    language: LanguageCode,
) -> Result<SpeechInput, SpeechServiceError> {
    let translation = phrase
        .translations
        .get(&language)
        .ok_or_else(|| SpeechServiceError::UnsupportedLanguage(language.to_string()))?;

    let text = if !language.has_native_voice() {
        translation
            .tts_pronunciation
            .clone()
            .unwrap_or_else(|| translation.text.clone())
    } else {
        translation.text.clone()
    };

    Ok(SpeechInput {
        text,
        synthesis_locale: language.synthesis_locale(),
    })
}

pub struct SpeechService {
    catalogue_service: Arc<CatalogueService>,
    synthesis_repo: Arc<dyn SynthesisRepository>,
}

impl SpeechService {
    pub fn new(
        catalogue_service: Arc<CatalogueService>,
        synthesis_repo: Arc<dyn SynthesisRepository>,
    ) -> Self {
        Self {
            catalogue_service,
            synthesis_repo,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize a catalogue phrase in the requested language.
    ///
    /// Looks the phrase up, resolves the speech input (fallback locale and
    /// respelling rules included), and calls the synthesis gateway.
    ///
    /// Returns audio bytes ready for playback (MP3).
    async fn synthesize_phrase(
        &self,
        phrase_id: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize_phrase(
        &self,
        phrase_id: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, SpeechServiceError> {
        let phrase = self.catalogue_service.get_phrase_by_id(phrase_id).await?;

        let input = resolve_speech_input(&phrase, language)?;

        tracing::info!(
            phrase_id = phrase_id,
            language = %language,
            synthesis_locale = input.synthesis_locale,
            respelling_used = !language.has_native_voice()
                && phrase.translations[&language].tts_pronunciation.is_some(),
            "Resolved speech input"
        );

        let audio_data = self
            .synthesis_repo
            .synthesize(&input.text, input.synthesis_locale)
            .await
            .map_err(SpeechServiceError::Dependency)?;

        tracing::info!(
            phrase_id = phrase_id,
            language = %language,
            audio_size = audio_data.len(),
            "Phrase synthesized"
        );

        Ok(audio_data)
    }
}
