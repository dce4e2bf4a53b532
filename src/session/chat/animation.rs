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

// Spinner shown while an exchange is outstanding

use std::io::{Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use crossterm::{cursor, execute};
use anyhow::Result;
use colored::*;

const SPINNER_FRAMES: [&str; 8] = [
	"⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧",
];

const FRAME_INTERVAL_MS: u64 = 100;

/// Label naming the responder being waited on
pub fn waiting_label(responder_url: &str) -> String {
	match url::Url::parse(responder_url) {
		Ok(parsed) => match (parsed.host_str(), parsed.port()) {
			(Some(host), Some(port)) => format!("Waiting for reply from {}:{}...", host, port),
			(Some(host), None) => format!("Waiting for reply from {}...", host),
			_ => "Waiting for reply...".to_string(),
		},
		Err(_) => "Waiting for reply...".to_string(),
	}
}

fn spinner_frame(tick: usize) -> &'static str {
	SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

// Leading space, frame glyph, separator and label, in terminal columns
fn indicator_width(label: &str) -> usize {
	label.chars().count() + 3
}

/// Spin until `cancel_flag` is set, then blank the line so the reply prints cleanly
pub async fn show_loading_animation(cancel_flag: Arc<AtomicBool>, label: String) -> Result<()> {
	let mut stdout = stdout();
	let mut tick = 0;

	execute!(stdout, cursor::SavePosition)?;

	while !cancel_flag.load(Ordering::SeqCst) {
		execute!(stdout, cursor::RestorePosition)?;
		print!(" {} {}", spinner_frame(tick).cyan(), label.bright_blue());
		stdout.flush()?;

		tick = tick.wrapping_add(1);
		tokio::time::sleep(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS)).await;
	}

	execute!(stdout, cursor::RestorePosition)?;
	print!("{}", " ".repeat(indicator_width(&label)));
	execute!(stdout, cursor::RestorePosition)?;
	stdout.flush()?;

	Ok(())
}
