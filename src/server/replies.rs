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

// Keyword rules that turn a user message into a bot reply

pub const GREETING_REPLY: &str = "Hello! How can I help you today?";
pub const HELP_REPLY: &str = "I'm here to assist you. What do you need help with?";
pub const FAREWELL_REPLY: &str = "Goodbye! Have a great day!";

/// Pick a reply for `message`. Matching is case-insensitive on substrings
/// and the first rule that matches wins, so "hi" also fires inside words
/// such as "this".
pub fn generate_bot_response(message: &str) -> String {
	let message_lower = message.to_lowercase();

	if message_lower.contains("hello") || message_lower.contains("hi") {
		GREETING_REPLY.to_string()
	} else if message_lower.contains("help") {
		HELP_REPLY.to_string()
	} else if message_lower.contains("bye") {
		FAREWELL_REPLY.to_string()
	} else {
		format!("I received your message: '{}'. How can I help you with that?", message)
	}
}
