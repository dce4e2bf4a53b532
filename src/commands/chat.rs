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

use chatdesk::config::Config;
use chatdesk::session::chat::run_interactive_session;
use chatdesk::session::HttpResponder;

#[derive(Args, Debug)]
pub struct ChatArgs {
	/// Responder endpoint to talk to instead of the configured one (runtime only, not saved)
	#[arg(long)]
	pub url: Option<String>,
}

pub async fn execute(args: &ChatArgs, mut config: Config) -> Result<()> {
	if let Some(url) = &args.url {
		config.responder_url = url.clone();
		config.validate_responder_url()?;
	}

	let responder = HttpResponder::from_config(&config)?;
	run_interactive_session(&config, &responder).await
}
