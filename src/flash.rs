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

// Transient status banners shown around the chat transcript

use colored::*;
use serde::{Deserialize, Serialize};

/// Severity tag of a flash message, drawn from a fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Success,
	Error,
	Warning,
	Info,
}

impl Severity {
	pub fn as_str(&self) -> &'static str {
		match self {
			Severity::Success => "success",
			Severity::Error => "error",
			Severity::Warning => "warning",
			Severity::Info => "info",
		}
	}

	fn marker(&self) -> &'static str {
		match self {
			Severity::Success => "✓",
			Severity::Error => "✗",
			Severity::Warning => "!",
			Severity::Info => "i",
		}
	}
}

impl std::str::FromStr for Severity {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"success" => Ok(Severity::Success),
			"error" => Ok(Severity::Error),
			"warning" => Ok(Severity::Warning),
			"info" => Ok(Severity::Info),
			other => Err(anyhow::anyhow!("Unknown flash severity: '{}'", other)),
		}
	}
}

/// One status banner: free text plus exactly one severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
	pub severity: Severity,
	pub text: String,
}

impl Flash {
	pub fn new(severity: Severity, text: impl Into<String>) -> Self {
		Self {
			severity,
			text: text.into(),
		}
	}

	pub fn success(text: impl Into<String>) -> Self {
		Self::new(Severity::Success, text)
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self::new(Severity::Error, text)
	}

	pub fn warning(text: impl Into<String>) -> Self {
		Self::new(Severity::Warning, text)
	}

	pub fn info(text: impl Into<String>) -> Self {
		Self::new(Severity::Info, text)
	}

	/// Render as a single coloured terminal line
	pub fn render(&self) -> String {
		let line = format!("{} {}", self.severity.marker(), self.text);
		match self.severity {
			Severity::Success => line.bright_green().to_string(),
			Severity::Error => line.bright_red().to_string(),
			Severity::Warning => line.bright_yellow().to_string(),
			Severity::Info => line.bright_cyan().to_string(),
		}
	}

	/// Errors go to stderr, everything else to stdout
	pub fn show(&self) {
		match self.severity {
			Severity::Error => eprintln!("{}", self.render()),
			_ => println!("{}", self.render()),
		}
	}
}
