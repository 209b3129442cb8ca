pub mod error;
pub mod language;
pub mod service;

pub use error::SpeechServiceError;
pub use language::LanguageCode;
pub use service::{resolve_speech_input, SpeechInput, SpeechService, SpeechServiceApi};
