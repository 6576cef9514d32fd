// src/summarizer/models.rs
use serde::{Deserialize, Serialize};

/// Request body for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// The subset of the completion response we read.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the API produced any.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage { role: "user", content: "hello" }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-4o",
                "messages": [{ "role": "user", "content": "hello" }]
            })
        );
    }

    #[test]
    fn test_first_content_reads_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "choices": [
                    { "index": 0, "message": { "role": "assistant", "content": "Kurz." }, "finish_reason": "stop" },
                    { "index": 1, "message": { "role": "assistant", "content": "Other" }, "finish_reason": "stop" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(response.first_content().as_deref(), Some("Kurz."));
    }

    #[test]
    fn test_missing_or_null_content() {
        let empty: ChatCompletionResponse = serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
        assert!(empty.first_content().is_none());

        let no_choices: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(no_choices.first_content().is_none());

        let null: ChatCompletionResponse =
            serde_json::from_str(r#"{ "choices": [{ "message": { "content": null } }] }"#).unwrap();
        assert!(null.first_content().is_none());
    }
}
