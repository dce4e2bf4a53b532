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

//! Default configuration values

use super::*;

/// Centralized default values for all configuration options
pub struct ConfigDefaults;

impl ConfigDefaults {
	pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::None;
	pub const DEFAULT_RESPONDER_URL: &'static str = "http://127.0.0.1:8000/chat/";
	pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1000;
	pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 0;
	pub const DEFAULT_SERVER_BIND: &'static str = "127.0.0.1:8000";

	/// Environment variable that overrides the responder endpoint
	pub const RESPONDER_URL_ENV: &'static str = "CHATDESK_RESPONDER_URL";

	pub fn is_default_log_level(value: &LogLevel) -> bool {
		matches!(value, LogLevel::None)
	}

	pub fn is_default_responder_url(value: &str) -> bool {
		value == Self::DEFAULT_RESPONDER_URL
	}

	pub fn is_default_max_message_length(value: usize) -> bool {
		value == Self::DEFAULT_MAX_MESSAGE_LENGTH
	}
}
