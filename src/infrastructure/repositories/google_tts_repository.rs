use super::synthesis_repository::SynthesisRepository;
use async_trait::async_trait;
use std::time::Duration;

/// Google Translate TTS implementation of the synthesis gateway.
/// Same unauthenticated endpoint the gTTS library wraps.
pub struct GoogleTtsRepository {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTtsRepository {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build TTS HTTP client: {}", e))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl SynthesisRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, locale: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let url = format!("{}/translate_tts", self.base_url);

        tracing::info!(
            locale = locale,
            text_length = text.len(),
            text_preview = &text[..text.len().min(200)],
            "Calling Google Translate TTS"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", locale),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    locale = locale,
                    "Google Translate TTS request failed"
                );
                format!("TTS request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = %status,
                locale = locale,
                "Google Translate TTS returned an error status"
            );
            return Err(format!("TTS backend returned status {}", status));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to read TTS audio body");
                format!("Failed to read audio body: {}", e)
            })?
            .to_vec();

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google-translate-tts",
            latency_ms = duration.as_millis(),
            locale = locale,
            text_length = text.len(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }
}
