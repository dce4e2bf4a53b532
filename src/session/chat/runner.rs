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

// Interactive session runner

use super::animation::{show_loading_animation, waiting_label};
use super::commands::{help_text, ChatCommand};
use super::input::{create_editor, read_user_input, InputEvent};
use super::session::{ChatSession, ChatView, SubmitOutcome};
use crate::config::Config;
use crate::flash::Flash;
use crate::session::{Author, Message, Responder, Transcript};
use crate::log_debug;
use anyhow::Result;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Renders the transcript to the terminal as it grows
#[derive(Debug, Default)]
pub struct TerminalView {
	/// Also print User messages; off in the interactive loop, where the
	/// prompt line already shows them
	pub echo_user: bool,
}

impl TerminalView {
	pub fn format_message(message: &Message) -> String {
		let time = message.timestamp().format("%H:%M").to_string();
		match message.author() {
			Author::User => format!(
				"{} {} {}",
				time.bright_black(),
				format!("{}:", message.author().label()).bright_blue(),
				message.text()
			),
			Author::Bot => format!(
				"{} {} {}",
				time.bright_black(),
				format!("{}:", message.author().label()).bright_green(),
				message.text().bright_white()
			),
		}
	}

	pub fn print_transcript(transcript: &Transcript) {
		if transcript.is_empty() {
			println!("{}", "No messages yet.".bright_yellow());
			return;
		}
		println!("{}", "───────────── Transcript ─────────────".bright_cyan());
		for message in transcript {
			println!("{}", Self::format_message(message));
		}
		println!();
	}
}

impl ChatView for TerminalView {
	fn render_message(&mut self, message: &Message) {
		if message.author() == Author::User && !self.echo_user {
			return;
		}
		println!("{}", Self::format_message(message));
	}
}

// Run an interactive chat session against the given responder
pub async fn run_interactive_session(config: &Config, responder: &dyn Responder) -> Result<()> {
	let mut chat = ChatSession::from_config(config, TerminalView::default());
	let mut editor = create_editor()?;
	let label = waiting_label(&config.responder_url);

	Flash::success(format!("Chat session started with {}", config.responder_url)).show();
	println!("Type /help for available commands.");
	println!();

	loop {
		// The prompt is only offered while Idle, so a new line can never
		// be submitted while an exchange is outstanding
		let line = match read_user_input(&mut editor)? {
			InputEvent::Line(line) => line,
			InputEvent::Interrupted => continue,
			InputEvent::Eof => break,
		};

		if let Some(command) = ChatCommand::parse(&line) {
			match command {
				ChatCommand::Help => println!("{}", help_text()),
				ChatCommand::History => TerminalView::print_transcript(chat.transcript()),
				ChatCommand::Exit => {
					println!("Exiting session.");
					break;
				}
				ChatCommand::Unknown(name) => {
					Flash::warning(format!("Unknown command: {}. Type /help for available commands.", name)).show();
				}
			}
			continue;
		}

		if chat.set_draft(&line) {
			Flash::warning(format!(
				"Message cut to {} characters",
				chat.max_message_length()
			))
			.show();
		}

		match chat.submit_draft() {
			SubmitOutcome::Sent(text) => {
				let cancel_flag = Arc::new(AtomicBool::new(false));
				let animation = tokio::spawn(show_loading_animation(cancel_flag.clone(), label.clone()));

				let result = responder.respond(&text).await;

				cancel_flag.store(true, Ordering::SeqCst);
				match animation.await {
					Ok(Err(e)) => log_debug!("Loading animation failed: {}", e),
					Err(e) => log_debug!("Loading animation task failed: {}", e),
					Ok(Ok(())) => {}
				}
				println!();

				// resolve() collapses every failure into the fallback reply
				chat.resolve(result);
			}
			SubmitOutcome::Empty => {}
			SubmitOutcome::Busy => {
				Flash::warning("Still waiting for the previous reply").show();
			}
		}
	}

	Flash::info(format!("{} messages exchanged", chat.transcript().len())).show();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_message() {
		colored::control::set_override(false);
		let message = Message::new(Author::Bot, "Hi there!");
		let line = TerminalView::format_message(&message);
		assert!(line.ends_with("Bot: Hi there!"), "unexpected line: {}", line);

		let message = Message::new(Author::User, "Hello");
		assert!(TerminalView::format_message(&message).ends_with("You: Hello"));
	}
}
