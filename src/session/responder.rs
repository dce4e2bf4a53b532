// Copyright 2025 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Responder abstraction: maps one user message to one reply

use crate::config::Config;
use crate::log_debug;
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body of the outgoing call
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
	#[serde(default)]
	pub message: String,
}

/// Body of a successful reply. Only `response` is required.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
	pub response: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
}

/// Every way the outgoing call can fail.
///
/// The chat session treats all variants the same; the distinction only
/// reaches debug logs.
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
	#[error("responder unreachable: {0}")]
	Transport(#[source] reqwest::Error),

	#[error("responder returned status {0}")]
	Status(StatusCode),

	#[error("malformed responder reply: {0}")]
	Malformed(String),
}

/// Trait for anything that can answer a chat message
#[async_trait::async_trait]
pub trait Responder: Send + Sync {
	/// Send one message and wait for the reply text
	async fn respond(&self, message: &str) -> Result<String, ResponderError>;
}

/// Responder reached over HTTP with a JSON POST
pub struct HttpResponder {
	client: Client,
	url: String,
}

impl HttpResponder {
	pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
		let mut builder = Client::builder();
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}
		let client = builder.build().context("Failed to build HTTP client")?;

		Ok(Self {
			client,
			url: url.into(),
		})
	}

	pub fn from_config(config: &Config) -> Result<Self> {
		Self::new(config.responder_url.clone(), config.request_timeout())
	}

	pub fn url(&self) -> &str {
		&self.url
	}
}

#[async_trait::async_trait]
impl Responder for HttpResponder {
	async fn respond(&self, message: &str) -> Result<String, ResponderError> {
		let request = ChatRequest {
			message: message.to_string(),
		};
		log_debug!("POST {} ({} chars)", self.url, message.chars().count());

		let response = self
			.client
			.post(&self.url)
			.json(&request)
			.send()
			.await
			.map_err(ResponderError::Transport)?;

		let status = response.status();
		if !status.is_success() {
			return Err(ResponderError::Status(status));
		}

		let body = response.text().await.map_err(ResponderError::Transport)?;
		let reply: ChatReply =
			serde_json::from_str(&body).map_err(|e| ResponderError::Malformed(e.to_string()))?;

		log_debug!("Responder answered with {} chars", reply.response.chars().count());
		Ok(reply.response)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::session::chat::{ChatSession, ChatState, NullView};
	use crate::session::FALLBACK_REPLY;
	use axum::http::StatusCode as AxumStatus;
	use axum::routing::post;
	use axum::{Json, Router};

	async fn spawn(router: Router) -> String {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, router).await.unwrap();
		});
		format!("http://{}/chat/", addr)
	}

	#[test]
	fn test_request_shape() {
		let json = serde_json::to_value(ChatRequest {
			message: "Hello".to_string(),
		})
		.unwrap();
		assert_eq!(json, serde_json::json!({ "message": "Hello" }));
	}

	#[test]
	fn test_reply_ignores_extra_fields() {
		let reply: ChatReply =
			serde_json::from_str(r#"{"response":"Hi","status":"success","extra":1}"#).unwrap();
		assert_eq!(reply.response, "Hi");
		assert_eq!(reply.status.as_deref(), Some("success"));
	}

	#[tokio::test]
	async fn test_successful_reply() {
		let router = Router::new().route(
			"/chat/",
			post(|Json(req): Json<ChatRequest>| async move {
				Json(serde_json::json!({ "response": format!("echo: {}", req.message) }))
			}),
		);
		let url = spawn(router).await;

		let responder = HttpResponder::new(url, None).unwrap();
		let reply = responder.respond("ping").await.unwrap();
		assert_eq!(reply, "echo: ping");
	}

	#[tokio::test]
	async fn test_non_success_status() {
		let router = Router::new().route(
			"/chat/",
			post(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, Json(serde_json::json!({ "response": "nope" }))) }),
		);
		let url = spawn(router).await;

		let responder = HttpResponder::new(url, None).unwrap();
		match responder.respond("ping").await {
			Err(ResponderError::Status(status)) => assert_eq!(status.as_u16(), 500),
			other => panic!("expected status error, got {:?}", other),
		}
	}

	#[tokio::test]
	async fn test_malformed_reply() {
		let router = Router::new().route("/chat/", post(|| async { Json(serde_json::json!({ "reply": "wrong field" })) }));
		let url = spawn(router).await;

		let responder = HttpResponder::new(url, None).unwrap();
		assert!(matches!(
			responder.respond("ping").await,
			Err(ResponderError::Malformed(_))
		));
	}

	#[tokio::test]
	async fn test_elapsed_timeout_is_a_transport_failure() {
		let router = Router::new().route(
			"/chat/",
			post(|| async {
				tokio::time::sleep(Duration::from_secs(3)).await;
				Json(serde_json::json!({ "response": "too late" }))
			}),
		);
		let url = spawn(router).await;
		let config = Config {
			responder_url: url,
			request_timeout_seconds: 1,
			..Default::default()
		};

		let responder = HttpResponder::from_config(&config).unwrap();
		match responder.respond("ping").await {
			Err(ResponderError::Transport(e)) => assert!(e.is_timeout(), "expected a timeout, got {}", e),
			other => panic!("expected transport error, got {:?}", other),
		}

		let mut chat = ChatSession::new(NullView, config.max_message_length);
		chat.set_draft("ping");
		chat.exchange(&responder).await;
		assert_eq!(chat.transcript().last().map(|m| m.text()), Some(FALLBACK_REPLY));
		assert_eq!(chat.state(), ChatState::Idle);
	}

	#[tokio::test]
	async fn test_unreachable_responder() {
		// Bind then drop to get a port nothing listens on
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let responder = HttpResponder::new(format!("http://{}/chat/", addr), Some(Duration::from_secs(5))).unwrap();
		assert!(matches!(
			responder.respond("ping").await,
			Err(ResponderError::Transport(_))
		));
	}
}
