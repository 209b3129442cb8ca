use async_trait::async_trait;

/// Gateway to the speech synthesis backend.
/// Abstracts the underlying provider behind a "text + locale in, audio bytes
/// out" contract.
///
/// Implementations are responsible for:
/// - Provider-specific transport and encoding
/// - Bounding the request with a timeout
#[async_trait]
pub trait SynthesisRepository: Send + Sync {
    /// Synthesize text under the given backend locale
    ///
    /// Returns audio data ready for playback (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The resolved text to synthesize (plain text or a tuned
    ///   respelling, already chosen by the caller)
    /// * `locale` - A locale the backend natively supports
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unavailable
    async fn synthesize(&self, text: &str, locale: &str) -> Result<Vec<u8>, String>;
}
