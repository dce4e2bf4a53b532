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

// Chat session implementation

use crate::config::Config;
use crate::session::{Author, Message, Responder, ResponderError, Transcript, FALLBACK_REPLY};
use crate::log_debug;

/// Submission affordance state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
	/// Submit enabled, nothing outstanding
	Idle,
	/// Submit disabled, exactly one request outstanding
	Waiting,
}

/// Presentation side of a chat session.
///
/// The session drives the view; the view never mutates the session.
pub trait ChatView {
	/// A message was appended to the transcript
	fn render_message(&mut self, message: &Message);

	fn set_submit_enabled(&mut self, _enabled: bool) {}

	fn scroll_to_latest(&mut self) {}

	fn focus_draft(&mut self) {}
}

/// View that renders nothing, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl ChatView for NullView {
	fn render_message(&mut self, _message: &Message) {}
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The draft became a User message; carries the text to send
	Sent(String),
	/// Draft was empty or whitespace only; nothing happened
	Empty,
	/// An exchange is already outstanding; nothing happened
	Busy,
}

/// Chat session: transcript, draft and the Idle/Waiting guard
pub struct ChatSession<V: ChatView> {
	transcript: Transcript,
	draft: String,
	state: ChatState,
	max_message_length: usize,
	view: V,
}

impl<V: ChatView> ChatSession<V> {
	pub fn new(view: V, max_message_length: usize) -> Self {
		let mut session = Self {
			transcript: Transcript::new(),
			draft: String::new(),
			state: ChatState::Idle,
			max_message_length,
			view,
		};
		session.view.set_submit_enabled(true);
		session
	}

	pub fn from_config(config: &Config, view: V) -> Self {
		Self::new(view, config.max_message_length)
	}

	pub fn transcript(&self) -> &Transcript {
		&self.transcript
	}

	pub fn state(&self) -> ChatState {
		self.state
	}

	pub fn is_waiting(&self) -> bool {
		self.state == ChatState::Waiting
	}

	pub fn draft(&self) -> &str {
		&self.draft
	}

	pub fn max_message_length(&self) -> usize {
		self.max_message_length
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn view_mut(&mut self) -> &mut V {
		&mut self.view
	}

	/// Replace the draft, cutting it at the input limit like a `maxlength` field.
	/// Returns true when the text had to be truncated.
	pub fn set_draft(&mut self, text: &str) -> bool {
		match text.char_indices().nth(self.max_message_length) {
			Some((cut, _)) => {
				self.draft = text[..cut].to_string();
				true
			}
			None => {
				self.draft = text.to_string();
				false
			}
		}
	}

	/// Turn the draft into a User message and move to Waiting.
	///
	/// The caller must deliver exactly one of `on_response` / `on_failure`
	/// for every `Sent` outcome.
	pub fn submit_draft(&mut self) -> SubmitOutcome {
		if self.state == ChatState::Waiting {
			log_debug!("Submission ignored: an exchange is still outstanding");
			return SubmitOutcome::Busy;
		}
		if self.draft.trim().is_empty() {
			return SubmitOutcome::Empty;
		}

		let text = std::mem::take(&mut self.draft);
		let message = self.transcript.push(Author::User, text.clone());
		self.view.render_message(message);

		self.state = ChatState::Waiting;
		self.view.set_submit_enabled(false);
		self.view.scroll_to_latest();

		SubmitOutcome::Sent(text)
	}

	/// Append the responder's reply and return to Idle.
	/// Returns false (and changes nothing) when no exchange is outstanding.
	pub fn on_response(&mut self, text: &str) -> bool {
		self.finish_exchange(text)
	}

	/// Append the fallback apology and return to Idle, exactly like a reply.
	pub fn on_failure(&mut self) -> bool {
		self.finish_exchange(FALLBACK_REPLY)
	}

	/// Route the outcome of the outgoing call to the matching callback
	pub fn resolve(&mut self, result: Result<String, ResponderError>) -> bool {
		match result {
			Ok(reply) => self.on_response(&reply),
			Err(e) => {
				log_debug!("Exchange failed: {}", e);
				self.on_failure()
			}
		}
	}

	/// Submit the draft and, if sent, await the responder and resolve.
	pub async fn exchange<R>(&mut self, responder: &R) -> SubmitOutcome
	where
		R: Responder + ?Sized,
	{
		let outcome = self.submit_draft();
		if let SubmitOutcome::Sent(text) = &outcome {
			let result = responder.respond(text).await;
			self.resolve(result);
		}
		outcome
	}

	fn finish_exchange(&mut self, text: &str) -> bool {
		if self.state != ChatState::Waiting {
			log_debug!("Ignoring a reply that arrived with no exchange outstanding");
			return false;
		}

		let message = self.transcript.push(Author::Bot, text);
		self.view.render_message(message);

		self.state = ChatState::Idle;
		self.view.set_submit_enabled(true);
		self.view.scroll_to_latest();
		self.view.focus_draft();
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[derive(Debug, Clone, PartialEq, Eq)]
	enum ViewEvent {
		Rendered(Author, String),
		SubmitEnabled(bool),
		Scrolled,
		Focused,
	}

	#[derive(Default)]
	struct RecordingView {
		events: Vec<ViewEvent>,
	}

	impl ChatView for RecordingView {
		fn render_message(&mut self, message: &Message) {
			self.events.push(ViewEvent::Rendered(message.author(), message.text().to_string()));
		}

		fn set_submit_enabled(&mut self, enabled: bool) {
			self.events.push(ViewEvent::SubmitEnabled(enabled));
		}

		fn scroll_to_latest(&mut self) {
			self.events.push(ViewEvent::Scrolled);
		}

		fn focus_draft(&mut self) {
			self.events.push(ViewEvent::Focused);
		}
	}

	struct FixedResponder {
		reply: Option<&'static str>,
		calls: AtomicUsize,
	}

	impl FixedResponder {
		fn replying(reply: &'static str) -> Self {
			Self { reply: Some(reply), calls: AtomicUsize::new(0) }
		}

		fn failing() -> Self {
			Self { reply: None, calls: AtomicUsize::new(0) }
		}
	}

	#[async_trait::async_trait]
	impl Responder for FixedResponder {
		async fn respond(&self, _message: &str) -> Result<String, ResponderError> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			match self.reply {
				Some(reply) => Ok(reply.to_string()),
				None => Err(ResponderError::Malformed("no reply configured".to_string())),
			}
		}
	}

	fn session() -> ChatSession<RecordingView> {
		ChatSession::new(RecordingView::default(), 1000)
	}

	fn shape(session: &ChatSession<RecordingView>) -> Vec<(Author, String)> {
		session
			.transcript()
			.iter()
			.map(|m| (m.author(), m.text().to_string()))
			.collect()
	}

	#[test]
	fn test_submit_appends_one_user_message() {
		for draft in ["Hello", "  padded  ", "x", "multi\nline"] {
			let mut chat = session();
			chat.set_draft(draft);
			assert_eq!(chat.submit_draft(), SubmitOutcome::Sent(draft.to_string()));
			assert_eq!(shape(&chat), vec![(Author::User, draft.to_string())]);
			assert_eq!(chat.state(), ChatState::Waiting);
			assert_eq!(chat.draft(), "", "Draft must be cleared after submit");
		}
	}

	#[test]
	fn test_blank_drafts_are_noops() {
		for draft in ["", " ", "   ", "\t\n", "\u{3000}"] {
			let mut chat = session();
			chat.set_draft(draft);
			assert_eq!(chat.submit_draft(), SubmitOutcome::Empty);
			assert!(chat.transcript().is_empty());
			assert_eq!(chat.state(), ChatState::Idle);
		}
	}

	#[test]
	fn test_second_submit_while_waiting_is_rejected() {
		let mut chat = session();
		chat.set_draft("first");
		assert!(matches!(chat.submit_draft(), SubmitOutcome::Sent(_)));

		chat.set_draft("second");
		assert_eq!(chat.submit_draft(), SubmitOutcome::Busy);
		assert_eq!(chat.transcript().len(), 1);
		assert_eq!(chat.state(), ChatState::Waiting);
		// The rejected draft stays in the field
		assert_eq!(chat.draft(), "second");
	}

	#[test]
	fn test_response_appends_bot_message_and_returns_to_idle() {
		let mut chat = session();
		chat.set_draft("Hello");
		chat.submit_draft();

		assert!(chat.on_response("Hi there!"));
		assert_eq!(
			shape(&chat),
			vec![(Author::User, "Hello".to_string()), (Author::Bot, "Hi there!".to_string())]
		);
		assert_eq!(chat.state(), ChatState::Idle);
	}

	#[test]
	fn test_failure_appends_fallback_and_returns_to_idle() {
		let mut chat = session();
		chat.set_draft("Test");
		chat.submit_draft();

		assert!(chat.on_failure());
		assert_eq!(
			shape(&chat),
			vec![
				(Author::User, "Test".to_string()),
				(Author::Bot, "Sorry, something went wrong. Please try again.".to_string())
			]
		);
		assert_eq!(chat.state(), ChatState::Idle);
	}

	#[test]
	fn test_callbacks_without_outstanding_exchange_are_ignored() {
		let mut chat = session();
		assert!(!chat.on_response("stray"));
		assert!(!chat.on_failure());
		assert!(chat.transcript().is_empty());
		assert_eq!(chat.state(), ChatState::Idle);
	}

	#[test]
	fn test_view_effects_follow_the_exchange() {
		let mut chat = session();
		chat.set_draft("Hello");
		chat.submit_draft();
		chat.on_response("Hi there!");

		assert_eq!(
			chat.view().events,
			vec![
				ViewEvent::SubmitEnabled(true),
				ViewEvent::Rendered(Author::User, "Hello".to_string()),
				ViewEvent::SubmitEnabled(false),
				ViewEvent::Scrolled,
				ViewEvent::Rendered(Author::Bot, "Hi there!".to_string()),
				ViewEvent::SubmitEnabled(true),
				ViewEvent::Scrolled,
				ViewEvent::Focused,
			]
		);
	}

	#[test]
	fn test_success_and_failure_have_the_same_shape() {
		let mut ok = session();
		ok.set_draft("Test");
		ok.submit_draft();
		ok.on_response("anything");

		let mut failed = session();
		failed.set_draft("Test");
		failed.submit_draft();
		failed.on_failure();

		let ok_authors: Vec<Author> = ok.transcript().iter().map(|m| m.author()).collect();
		let failed_authors: Vec<Author> = failed.transcript().iter().map(|m| m.author()).collect();
		assert_eq!(ok_authors, failed_authors);
		assert_eq!(ok.state(), failed.state());
		assert_eq!(ok.view().events.len(), failed.view().events.len());
	}

	#[test]
	fn test_draft_is_cut_at_the_input_limit() {
		let mut chat = ChatSession::new(NullView, 5);
		assert!(!chat.set_draft("short"));
		assert_eq!(chat.draft(), "short");

		assert!(chat.set_draft("héllo wörld"));
		assert_eq!(chat.draft(), "héllo");
	}

	#[tokio::test]
	async fn test_exchange_end_to_end() {
		let responder = FixedResponder::replying("Hi there!");
		let mut chat = session();

		chat.set_draft("Hello");
		assert_eq!(chat.exchange(&responder).await, SubmitOutcome::Sent("Hello".to_string()));
		assert_eq!(
			shape(&chat),
			vec![(Author::User, "Hello".to_string()), (Author::Bot, "Hi there!".to_string())]
		);
		assert_eq!(chat.state(), ChatState::Idle);
		assert_eq!(responder.calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn test_exchange_whitespace_sends_nothing() {
		let responder = FixedResponder::replying("unused");
		let mut chat = session();

		chat.set_draft("   ");
		assert_eq!(chat.exchange(&responder).await, SubmitOutcome::Empty);
		assert!(chat.transcript().is_empty());
		assert_eq!(chat.state(), ChatState::Idle);
		assert_eq!(responder.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn test_exchange_failure_uses_fallback() {
		let responder = FixedResponder::failing();
		let mut chat = session();

		chat.set_draft("Test");
		chat.exchange(&responder).await;
		assert_eq!(
			shape(&chat),
			vec![(Author::User, "Test".to_string()), (Author::Bot, FALLBACK_REPLY.to_string())]
		);
		assert_eq!(chat.state(), ChatState::Idle);

		// The session is usable again after a failure
		chat.set_draft("Retry");
		assert!(matches!(chat.submit_draft(), SubmitOutcome::Sent(_)));
	}

	#[tokio::test]
	async fn test_exchange_through_trait_object() {
		let responder: Box<dyn Responder> = Box::new(FixedResponder::replying("boxed"));
		let mut chat = ChatSession::new(NullView, 1000);

		chat.set_draft("hi");
		chat.exchange(responder.as_ref()).await;
		assert_eq!(chat.transcript().last().map(|m| m.text()), Some("boxed"));
	}
}
