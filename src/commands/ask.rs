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

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::io::{self, IsTerminal, Read};

use chatdesk::config::Config;
use chatdesk::session::chat::{ChatSession, NullView, SubmitOutcome};
use chatdesk::session::{HttpResponder, FALLBACK_REPLY};

#[derive(Args, Debug)]
pub struct AskArgs {
	/// Message to send; read from stdin when omitted
	#[arg(value_name = "MESSAGE")]
	pub input: Option<String>,

	/// Responder endpoint to talk to instead of the configured one (runtime only, not saved)
	#[arg(long)]
	pub url: Option<String>,

	/// Print the reply without colors
	#[arg(long)]
	pub raw: bool,
}

fn read_message(args: &AskArgs) -> Result<String> {
	if let Some(input) = &args.input {
		return Ok(input.clone());
	}

	let stdin = io::stdin();
	if stdin.is_terminal() {
		return Err(anyhow!("No message given. Pass it as an argument or pipe it via stdin."));
	}

	let mut buffer = String::new();
	stdin.lock().read_to_string(&mut buffer)?;
	Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

// Send one message and print the bot's reply
pub async fn execute(args: &AskArgs, mut config: Config) -> Result<()> {
	if let Some(url) = &args.url {
		config.responder_url = url.clone();
		config.validate_responder_url()?;
	}

	let message = read_message(args)?;
	let responder = HttpResponder::from_config(&config)?;
	let mut chat = ChatSession::from_config(&config, NullView);

	if chat.set_draft(&message) {
		eprintln!(
			"{}",
			format!("Message cut to {} characters", chat.max_message_length()).bright_yellow()
		);
	}

	match chat.exchange(&responder).await {
		SubmitOutcome::Sent(_) => {}
		SubmitOutcome::Empty => return Err(anyhow!("Message is empty")),
		SubmitOutcome::Busy => return Err(anyhow!("Another exchange is still outstanding")),
	}

	let reply = chat
		.transcript()
		.last()
		.map(|m| m.text().to_string())
		.unwrap_or_else(|| FALLBACK_REPLY.to_string());

	if args.raw {
		println!("{}", reply);
	} else {
		println!("{}", reply.bright_green());
	}

	Ok(())
}
