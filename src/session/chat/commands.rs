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

// Chat commands module

pub const HELP_COMMAND: &str = "/help";
pub const HISTORY_COMMAND: &str = "/history";
pub const EXIT_COMMAND: &str = "/exit";
pub const QUIT_COMMAND: &str = "/quit";

// List of all available commands for autocomplete
pub const COMMANDS: [&str; 4] = [
	HELP_COMMAND,
	HISTORY_COMMAND,
	EXIT_COMMAND,
	QUIT_COMMAND,
];

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
	Help,
	History,
	Exit,
	Unknown(String),
}

impl ChatCommand {
	/// Parse a line as a command. Lines not starting with '/' are chat text.
	pub fn parse(line: &str) -> Option<Self> {
		let trimmed = line.trim();
		if !trimmed.starts_with('/') {
			return None;
		}

		let name = trimmed.split_whitespace().next().unwrap_or(trimmed);
		let command = match name {
			HELP_COMMAND => ChatCommand::Help,
			HISTORY_COMMAND => ChatCommand::History,
			EXIT_COMMAND | QUIT_COMMAND => ChatCommand::Exit,
			other => ChatCommand::Unknown(other.to_string()),
		};
		Some(command)
	}
}

pub fn help_text() -> String {
	format!(
		"Available commands:\n  {}     Show this help\n  {}  Print the transcript so far\n  {} / {}  End the session\nAnything else is sent to the responder. Press Enter to send.",
		HELP_COMMAND, HISTORY_COMMAND, EXIT_COMMAND, QUIT_COMMAND
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_commands() {
		assert_eq!(ChatCommand::parse("/help"), Some(ChatCommand::Help));
		assert_eq!(ChatCommand::parse("  /history  "), Some(ChatCommand::History));
		assert_eq!(ChatCommand::parse("/exit"), Some(ChatCommand::Exit));
		assert_eq!(ChatCommand::parse("/quit now"), Some(ChatCommand::Exit));
		assert_eq!(
			ChatCommand::parse("/dance"),
			Some(ChatCommand::Unknown("/dance".to_string()))
		);
	}

	#[test]
	fn test_plain_text_is_not_a_command() {
		assert_eq!(ChatCommand::parse("hello /help"), None);
		assert_eq!(ChatCommand::parse(""), None);
	}

	#[test]
	fn test_help_lists_every_command() {
		let help = help_text();
		for command in COMMANDS {
			assert!(help.contains(command), "help is missing {}", command);
		}
	}
}
