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

// User input handling module

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Editor, Config as RustylineConfig, CompletionType, EditMode};
use colored::*;

use crate::session::chat_helper::CommandHelper;

pub type ChatEditor = Editor<CommandHelper, DefaultHistory>;

/// What the draft field produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
	/// Enter was pressed; carries the line as typed
	Line(String),
	/// Ctrl+C: discard the current line
	Interrupted,
	/// Ctrl+D: leave the session
	Eof,
}

// The editor keeps its history for the whole session, so build it once
pub fn create_editor() -> Result<ChatEditor> {
	let config = RustylineConfig::builder()
		.completion_type(CompletionType::List)
		.edit_mode(EditMode::Emacs)
		.auto_add_history(true)
		.bell_style(rustyline::config::BellStyle::None)
		.build();

	let mut editor = Editor::with_config(config)?;
	editor.set_helper(Some(CommandHelper::new()));
	Ok(editor)
}

// Read one line from the draft field; Enter is the confirm key
pub fn read_user_input(editor: &mut ChatEditor) -> Result<InputEvent> {
	let prompt = "> ".bright_blue().to_string();

	match editor.readline(&prompt) {
		Ok(line) => Ok(InputEvent::Line(line)),
		Err(ReadlineError::Interrupted) => {
			println!("\nCancelled");
			Ok(InputEvent::Interrupted)
		},
		Err(ReadlineError::Eof) => {
			println!("\nExiting session.");
			Ok(InputEvent::Eof)
		},
		Err(err) => Err(err.into()),
	}
}
