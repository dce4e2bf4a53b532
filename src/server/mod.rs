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

//! HTTP responder endpoint.
//!
//! `POST /chat/` takes `{"message": "..."}` and answers
//! `{"response": "...", "status": "success"}`. Any other method on that
//! path, or a body that is not a JSON object, gets
//! `400 {"error": "Invalid request"}`.

pub mod replies;

pub use replies::generate_bot_response;

use crate::flash::Flash;
use crate::session::{ChatReply, ChatRequest};
use crate::{log_debug, log_error, log_info};
use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub const CHAT_PATH: &str = "/chat/";

/// Build the responder router
pub fn router() -> Router {
	Router::new()
		.route(CHAT_PATH, post(chat_response).fallback(invalid_request))
		.layer(CorsLayer::permissive())
}

async fn chat_response(body: Bytes) -> Response {
	let request = match parse_chat_request(&body) {
		Some(request) => request,
		None => return invalid_request().await,
	};

	log_info!("Chat message received ({} chars)", request.message.chars().count());
	let reply = ChatReply {
		response: generate_bot_response(&request.message),
		status: Some("success".to_string()),
	};
	(StatusCode::OK, Json(reply)).into_response()
}

/// Accept only a JSON object whose `message`, if present, is a string.
/// A missing `message` reads as an empty string.
fn parse_chat_request(body: &[u8]) -> Option<ChatRequest> {
	let value: Value = match serde_json::from_slice(body) {
		Ok(value) => value,
		Err(e) => {
			log_debug!("Rejected chat body: {}", e);
			return None;
		}
	};

	let Value::Object(fields) = value else {
		log_debug!("Rejected chat body: not a JSON object");
		return None;
	};

	let message = match fields.get("message") {
		None => String::new(),
		Some(Value::String(text)) => text.clone(),
		Some(_) => {
			log_debug!("Rejected chat body: message is not a string");
			return None;
		}
	};
	Some(ChatRequest { message })
}

async fn invalid_request() -> Response {
	(
		StatusCode::BAD_REQUEST,
		Json(serde_json::json!({ "error": "Invalid request" })),
	)
		.into_response()
}

/// Serve the responder on an already bound listener until Ctrl+C
pub async fn serve_on(listener: TcpListener) -> Result<()> {
	let addr = listener.local_addr().context("Failed to read listener address")?;
	Flash::success(format!("Responder listening on http://{}{}", addr, CHAT_PATH)).show();

	axum::serve(listener, router())
		.with_graceful_shutdown(shutdown_signal())
		.await
		.context("Responder server failed")?;

	Flash::info("Responder stopped").show();
	Ok(())
}

/// Bind `bind` and serve the responder until Ctrl+C
pub async fn serve(bind: &str) -> Result<()> {
	let listener = TcpListener::bind(bind)
		.await
		.context(format!("Failed to bind responder to {}", bind))?;
	serve_on(listener).await
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		log_error!("Failed to listen for Ctrl+C: {}", e);
		std::future::pending::<()>().await;
	}
}
