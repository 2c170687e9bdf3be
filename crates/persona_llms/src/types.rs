//! Request and stream types shared by all completion services.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

/// One completion request. Immutable once built; construct with
/// [`CompletionRequest::new`] plus the `with_*` methods.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_output_tokens: u32,
    /// Sampling temperature in [0, 1].
    pub temperature: f32,
    pub stream: bool,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_output_tokens: 500,
            temperature: 0.7,
            stream: false,
        }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

/// A finite, non-restartable sequence of text chunks.
///
/// Consumers concatenate chunks in arrival order. A service failure after
/// the stream opens is delivered as a final text chunk carrying the error
/// message, after which the stream ends; failures opening the stream are
/// returned as `Err` from `complete_streaming` instead.
pub struct CompletionStream {
    inner: Pin<Box<dyn Stream<Item = String> + Send>>,
}

impl CompletionStream {
    pub fn new(inner: Pin<Box<dyn Stream<Item = String> + Send>>) -> Self {
        Self { inner }
    }
}

impl Stream for CompletionStream {
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_request_defaults() {
        let request = CompletionRequest::new("hello");
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.max_output_tokens, 500);
        assert_eq!(request.temperature, 0.7);
        assert!(!request.stream);
    }

    #[test]
    fn test_request_builder() {
        let request = CompletionRequest::new("hello")
            .with_max_output_tokens(128)
            .with_temperature(0.2)
            .with_streaming(true);
        assert_eq!(request.max_output_tokens, 128);
        assert_eq!(request.temperature, 0.2);
        assert!(request.stream);
    }

    #[tokio::test]
    async fn test_stream_yields_in_order() {
        let chunks = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut stream = CompletionStream::new(Box::pin(futures::stream::iter(chunks)));
        let mut accumulated = String::new();
        while let Some(chunk) = stream.next().await {
            accumulated.push_str(&chunk);
        }
        assert_eq!(accumulated, "abc");
    }
}
