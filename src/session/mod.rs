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

// Session module for the chat message exchange

pub mod chat; // Chat session state machine and terminal front end
mod chat_helper; // Chat command completion
pub mod responder; // Outgoing call to the responder endpoint

pub use responder::{ChatReply, ChatRequest, HttpResponder, Responder, ResponderError};

use chrono::{DateTime, Local};

/// Bot text appended when an exchange fails for any reason
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
	User,
	Bot,
}

impl Author {
	pub fn label(&self) -> &'static str {
		match self {
			Author::User => "You",
			Author::Bot => "Bot",
		}
	}
}

/// One transcript entry. Immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
	author: Author,
	text: String,
	timestamp: DateTime<Local>,
}

impl Message {
	pub fn new(author: Author, text: impl Into<String>) -> Self {
		Self {
			author,
			text: text.into(),
			timestamp: Local::now(),
		}
	}

	pub fn author(&self) -> Author {
		self.author
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Local time the message was appended (display only)
	pub fn timestamp(&self) -> DateTime<Local> {
		self.timestamp
	}
}

impl PartialEq for Message {
	fn eq(&self, other: &Self) -> bool {
		self.author == other.author && self.text == other.text
	}
}

impl Eq for Message {}

/// Ordered, append-only log of the messages exchanged in one session.
///
/// Lives only in memory; dropping the owning session discards it.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
	messages: Vec<Message>,
}

impl Transcript {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a message and return a reference to the stored entry
	pub fn push(&mut self, author: Author, text: impl Into<String>) -> &Message {
		self.messages.push(Message::new(author, text));
		&self.messages[self.messages.len() - 1]
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	pub fn last(&self) -> Option<&Message> {
		self.messages.last()
	}

	pub fn messages(&self) -> &[Message] {
		&self.messages
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Message> {
		self.messages.iter()
	}
}

impl<'a> IntoIterator for &'a Transcript {
	type Item = &'a Message;
	type IntoIter = std::slice::Iter<'a, Message>;

	fn into_iter(self) -> Self::IntoIter {
		self.messages.iter()
	}
}
