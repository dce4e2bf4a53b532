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

mod commands;

use clap::{Parser, Subcommand};

use chatdesk::config::Config;
use commands::{AskArgs, ChatArgs, ConfigArgs, ServeArgs};

#[derive(Parser)]
#[command(name = "chatdesk")]
#[command(version)]
#[command(about = "Chat with a responder endpoint, or run one")]
struct ChatdeskArgs {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Start an interactive chat session
	Chat(ChatArgs),

	/// Send a single message and print the reply
	Ask(AskArgs),

	/// Run the responder endpoint
	Serve(ServeArgs),

	/// Generate or update the configuration file
	Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
	let args = ChatdeskArgs::parse();

	// Load configuration
	let config = Config::load()?;
	config.activate_logging();

	// The config command is how a broken configuration gets fixed, so it skips validation
	if let Commands::Config(config_args) = &args.command {
		return commands::config::execute(config_args, config);
	}

	config.validate()?;

	match &args.command {
		Commands::Chat(chat_args) => commands::chat::execute(chat_args, config).await,
		Commands::Ask(ask_args) => commands::ask::execute(ask_args, config).await,
		Commands::Serve(serve_args) => commands::serve::execute(serve_args, config).await,
		Commands::Config(_) => unreachable!(), // Already handled above
	}
}
