use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
};
use std::sync::Arc;

use crate::{
    domain::speech::{LanguageCode, SpeechService, SpeechServiceApi, SpeechServiceError},
    error::{AppError, AppResult},
};

pub struct AudioController {
    speech_service: Arc<SpeechService>,
}

impl AudioController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// GET /api/audio/{phraseId}/{language} - Synthesized phrase audio
    pub async fn get_audio(
        State(controller): State<Arc<AudioController>>,
        Path((phrase_id, language)): Path<(String, String)>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let language = LanguageCode::parse(&language).ok_or_else(|| {
            AppError::from(SpeechServiceError::UnsupportedLanguage(language.clone()))
        })?;

        let audio_data = controller
            .speech_service
            .synthesize_phrase(&phrase_id, language)
            .await
            .map_err(AppError::from)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            "X-Synthesis-Language",
            language.synthesis_locale().parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(audio_data)))
    }
}
