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

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod defaults;
pub mod loading;
pub mod validation;

pub use defaults::ConfigDefaults;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
	#[serde(rename = "none")]
	#[default]
	None,
	#[serde(rename = "info")]
	Info,
	#[serde(rename = "debug")]
	Debug,
}

impl LogLevel {
	/// Check if info logging is enabled
	pub fn is_info_enabled(&self) -> bool {
		matches!(self, LogLevel::Info | LogLevel::Debug)
	}

	/// Check if debug logging is enabled
	pub fn is_debug_enabled(&self) -> bool {
		matches!(self, LogLevel::Debug)
	}
}

impl std::str::FromStr for LogLevel {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"none" | "off" => Ok(LogLevel::None),
			"info" => Ok(LogLevel::Info),
			"debug" => Ok(LogLevel::Debug),
			other => Err(anyhow::anyhow!(
				"Unknown log level: '{}'. Valid levels are none, info, debug",
				other
			)),
		}
	}
}

impl std::fmt::Display for LogLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			LogLevel::None => "none",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
		};
		f.write_str(name)
	}
}

// Process-wide so server worker threads observe the same level as the CLI thread
static ACTIVE_LOG_LEVEL: RwLock<LogLevel> = RwLock::new(LogLevel::None);

/// Set the level used by the logging macros
pub fn set_log_level(level: LogLevel) {
	*ACTIVE_LOG_LEVEL.write() = level;
}

/// Get the level used by the logging macros
pub fn log_level() -> LogLevel {
	*ACTIVE_LOG_LEVEL.read()
}

/// Info logging macro with automatic cyan coloring
/// Shows info messages when log level is Info OR Debug
#[macro_export]
macro_rules! log_info {
	($($arg:tt)*) => {{
		if $crate::config::log_level().is_info_enabled() {
			use colored::Colorize;
			println!("{}", format!($($arg)*).cyan());
		}
	}};
}

/// Debug logging macro with automatic bright blue coloring
#[macro_export]
macro_rules! log_debug {
	($($arg:tt)*) => {{
		if $crate::config::log_level().is_debug_enabled() {
			use colored::Colorize;
			println!("{}", format!($($arg)*).bright_blue());
		}
	}};
}

/// Error logging macro with automatic bright red coloring
/// Always visible regardless of log level (errors should always be shown)
#[macro_export]
macro_rules! log_error {
	($($arg:tt)*) => {{
		use colored::Colorize;
		eprintln!("{}", format!($($arg)*).bright_red());
	}};
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
	/// Address the responder endpoint listens on
	pub bind: String,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			bind: ConfigDefaults::DEFAULT_SERVER_BIND.to_string(),
		}
	}
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
	pub log_level: LogLevel,

	/// Endpoint the chat client posts messages to
	pub responder_url: String,

	/// Maximum draft length in characters, mirrored from the responder
	pub max_message_length: usize,

	/// 0 waits for the responder indefinitely
	pub request_timeout_seconds: u64,

	pub server: ServerConfig,

	#[serde(skip)]
	pub config_path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: ConfigDefaults::DEFAULT_LOG_LEVEL,
			responder_url: ConfigDefaults::DEFAULT_RESPONDER_URL.to_string(),
			max_message_length: ConfigDefaults::DEFAULT_MAX_MESSAGE_LENGTH,
			request_timeout_seconds: ConfigDefaults::DEFAULT_REQUEST_TIMEOUT_SECONDS,
			server: ServerConfig::default(),
			config_path: None,
		}
	}
}

impl Config {
	/// Make this config's log level the active one for the logging macros
	pub fn activate_logging(&self) {
		set_log_level(self.log_level);
	}

	pub fn request_timeout(&self) -> Option<std::time::Duration> {
		if self.request_timeout_seconds == 0 {
			None
		} else {
			Some(std::time::Duration::from_secs(self.request_timeout_seconds))
		}
	}
}
