//! Hugging Face streaming support
//!
//! The text-generation endpoint streams SSE events:
//! - `data: {"token":{"text":"...","special":false},...}` per token
//! - a final event additionally carrying `generated_text`
//!
//! Failures after the stream opens are yielded as a last text chunk rather
//! than an error; consumers see them like any other model output.

use futures::stream::StreamExt;
use reqwest_eventsource::{Event, EventSource};

use super::types::HfStreamChunk;
use crate::error::ServiceError;
use crate::types::CompletionStream;

/// Turn an open EventSource into a chunk stream.
pub fn create_stream(mut event_source: EventSource) -> CompletionStream {
    let stream = async_stream::stream! {
        while let Some(event) = event_source.next().await {
            match event {
                Ok(Event::Open) => continue,
                Ok(Event::Message(message)) => {
                    match serde_json::from_str::<HfStreamChunk>(&message.data) {
                        Ok(chunk) => {
                            if let Some(text) = chunk_text(&chunk) {
                                yield text;
                            }
                            if chunk.generated_text.is_some() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "skipping unparseable stream payload");
                        }
                    }
                }
                Err(reqwest_eventsource::Error::StreamEnded) => break,
                Err(reqwest_eventsource::Error::InvalidStatusCode(status, response)) => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "unable to read error body".to_string());
                    yield ServiceError::from_status(status, body).to_string();
                    break;
                }
                Err(e) => {
                    yield format!("stream error: {e}");
                    break;
                }
            }
        }

        event_source.close();
    };

    CompletionStream::new(Box::pin(stream))
}

/// Renderable text of a chunk; special tokens and empty deltas are skipped.
fn chunk_text(chunk: &HfStreamChunk) -> Option<String> {
    if chunk.token.special || chunk.token.text.is_empty() {
        None
    } else {
        Some(chunk.token.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::huggingface::types::HfToken;

    #[test]
    fn test_chunk_text_plain_token() {
        let chunk = HfStreamChunk {
            token: HfToken {
                text: "Hello".to_string(),
                special: false,
            },
            generated_text: None,
        };
        assert_eq!(chunk_text(&chunk), Some("Hello".to_string()));
    }

    #[test]
    fn test_chunk_text_skips_special_and_empty() {
        let special = HfStreamChunk {
            token: HfToken {
                text: "</s>".to_string(),
                special: true,
            },
            generated_text: None,
        };
        assert_eq!(chunk_text(&special), None);

        let empty = HfStreamChunk {
            token: HfToken {
                text: String::new(),
                special: false,
            },
            generated_text: None,
        };
        assert_eq!(chunk_text(&empty), None);
    }

    #[test]
    fn test_chunk_payload_parses() {
        let data = r#"{"token":{"text":" calm","special":false},"generated_text":null}"#;
        let chunk: HfStreamChunk = serde_json::from_str(data).unwrap();
        assert_eq!(chunk.token.text, " calm");
        assert!(chunk.generated_text.is_none());
    }

    #[test]
    fn test_final_chunk_carries_generated_text() {
        let data = r#"{"token":{"text":".","special":false},"generated_text":"the whole answer."}"#;
        let chunk: HfStreamChunk = serde_json::from_str(data).unwrap();
        assert_eq!(chunk.generated_text.as_deref(), Some("the whole answer."));
    }
}
