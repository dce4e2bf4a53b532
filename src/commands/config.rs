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

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use chatdesk::config::{Config, ConfigDefaults, LogLevel};
use chatdesk::flash::Flash;

#[derive(Args, Debug)]
pub struct ConfigArgs {
	/// Set the responder endpoint the chat client posts to
	#[arg(long)]
	pub url: Option<String>,

	/// Set the maximum message length in characters
	#[arg(long)]
	pub max_length: Option<usize>,

	/// Set the responder request timeout in seconds (0 waits indefinitely)
	#[arg(long)]
	pub timeout: Option<u64>,

	/// Set log level (none, info, debug)
	#[arg(long)]
	pub log_level: Option<String>,

	/// Set the address the responder server listens on
	#[arg(long)]
	pub bind: Option<String>,

	/// Show current configuration values and exit
	#[arg(long)]
	pub show: bool,
}

fn default_marker(is_default: bool) -> String {
	if is_default {
		" (default)".dimmed().to_string()
	} else {
		String::new()
	}
}

fn show_config(config: &Config) {
	println!("{}", "───────────── Configuration ─────────────".bright_cyan());
	if let Some(path) = &config.config_path {
		println!("{} {}", "File:".yellow(), path.display());
	}
	println!(
		"{} {}{}",
		"Responder URL:".yellow(),
		config.responder_url.bright_white(),
		default_marker(ConfigDefaults::is_default_responder_url(&config.responder_url))
	);
	println!(
		"{} {}{}",
		"Max message length:".yellow(),
		config.max_message_length.to_string().bright_white(),
		default_marker(ConfigDefaults::is_default_max_message_length(config.max_message_length))
	);
	let timeout = match config.request_timeout() {
		Some(timeout) => format!("{}s", timeout.as_secs()),
		None => "none".to_string(),
	};
	println!("{} {}", "Request timeout:".yellow(), timeout.bright_white());
	println!(
		"{} {}{}",
		"Log level:".yellow(),
		config.log_level.to_string().bright_white(),
		default_marker(ConfigDefaults::is_default_log_level(&config.log_level))
	);
	println!("{} {}", "Server bind:".yellow(), config.server.bind.bright_white());
}

// Handle the configuration command
pub fn execute(args: &ConfigArgs, mut config: Config) -> Result<()> {
	if args.show {
		show_config(&config);
		return Ok(());
	}

	let mut modified = false;

	if let Some(url) = &args.url {
		config.responder_url = url.clone();
		Flash::info(format!("Set responder URL to {}", url)).show();
		modified = true;
	}

	if let Some(max_length) = args.max_length {
		config.max_message_length = max_length;
		Flash::info(format!("Set max message length to {}", max_length)).show();
		modified = true;
	}

	if let Some(timeout) = args.timeout {
		config.request_timeout_seconds = timeout;
		Flash::info(format!("Set request timeout to {}s", timeout)).show();
		modified = true;
	}

	if let Some(level) = &args.log_level {
		config.log_level = level.parse::<LogLevel>()?;
		Flash::info(format!("Set log level to {}", config.log_level)).show();
		modified = true;
	}

	if let Some(bind) = &args.bind {
		config.server.bind = bind.clone();
		Flash::info(format!("Set server bind address to {}", bind)).show();
		modified = true;
	}

	if modified {
		config.validate()?;
		let path = config.save()?;
		Flash::success(format!("Configuration saved to {}", path.display())).show();
	} else {
		let path = Config::create_default_config()?;
		Flash::success(format!("Configuration file: {}", path.display())).show();
	}

	println!();
	show_config(&config);
	Ok(())
}
