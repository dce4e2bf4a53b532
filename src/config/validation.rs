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
use std::net::SocketAddr;

use super::Config;

impl Config {
	/// Validate the configuration for common issues
	pub fn validate(&self) -> Result<()> {
		self.validate_responder_url()?;
		self.validate_max_message_length()?;
		self.validate_server_bind()?;
		Ok(())
	}

	pub fn validate_responder_url(&self) -> Result<()> {
		let url = url::Url::parse(&self.responder_url)
			.map_err(|e| anyhow!("Invalid responder_url '{}': {}", self.responder_url, e))?;

		match url.scheme() {
			"http" | "https" => Ok(()),
			scheme => Err(anyhow!(
				"Unsupported responder_url scheme '{}'. Use http or https",
				scheme
			)),
		}
	}

	pub fn validate_max_message_length(&self) -> Result<()> {
		if self.max_message_length == 0 {
			return Err(anyhow!("max_message_length must be greater than zero"));
		}
		Ok(())
	}

	pub fn validate_server_bind(&self) -> Result<()> {
		self.server
			.bind
			.parse::<SocketAddr>()
			.map(|_| ())
			.map_err(|e| anyhow!("Invalid server.bind '{}': {}", self.server.bind, e))
	}
}
