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

#[derive(Args, Debug)]
pub struct ServeArgs {
	/// Address to listen on instead of the configured server.bind
	#[arg(long)]
	pub bind: Option<String>,
}

pub async fn execute(args: &ServeArgs, config: Config) -> Result<()> {
	let bind = args.bind.clone().unwrap_or(config.server.bind);
	chatdesk::server::serve(&bind).await
}
