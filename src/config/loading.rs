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

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{Config, ConfigDefaults};

impl Config {
	/// Load configuration from the system-wide config file
	///
	/// A missing file is not an error: defaults are used and the
	/// environment overrides still apply.
	pub fn load() -> Result<Self> {
		let config_path = crate::directories::get_config_file_path()?;
		let mut config = Self::load_from(&config_path)?;
		config.apply_env_overrides(|key| std::env::var(key).ok());
		Ok(config)
	}

	/// Load configuration from an explicit path without environment overrides
	pub fn load_from(config_path: &Path) -> Result<Self> {
		if !config_path.exists() {
			return Ok(Config {
				config_path: Some(config_path.to_path_buf()),
				..Default::default()
			});
		}

		let config_str = fs::read_to_string(config_path).context(format!(
			"Failed to read config from {}",
			config_path.display()
		))?;
		let mut config: Config =
			toml::from_str(&config_str).context("Failed to parse TOML configuration")?;

		// Store the config path for future saves
		config.config_path = Some(config_path.to_path_buf());

		Ok(config)
	}

	/// Environment variables take precedence over config file values
	pub fn apply_env_overrides<F>(&mut self, lookup: F)
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(url) = lookup(ConfigDefaults::RESPONDER_URL_ENV) {
			if !url.trim().is_empty() {
				self.responder_url = url.trim().to_string();
			}
		}
	}

	/// Save configuration to the path it was loaded from, or the system-wide path
	pub fn save(&self) -> Result<PathBuf> {
		let config_path = match &self.config_path {
			Some(path) => path.clone(),
			None => crate::directories::get_config_file_path()?,
		};
		self.save_to(&config_path)?;
		Ok(config_path)
	}

	pub fn save_to(&self, config_path: &Path) -> Result<()> {
		if let Some(parent) = config_path.parent() {
			if !parent.exists() {
				fs::create_dir_all(parent).context(format!(
					"Failed to create config directory: {}",
					parent.display()
				))?;
			}
		}

		let config_str = toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;
		fs::write(config_path, config_str).context(format!(
			"Failed to write config to {}",
			config_path.display()
		))?;

		Ok(())
	}

	/// Create the default configuration file if none exists yet
	pub fn create_default_config() -> Result<PathBuf> {
		let config_path = crate::directories::get_config_file_path()?;
		if !config_path.exists() {
			Config::default().save_to(&config_path)?;
		}
		Ok(config_path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::LogLevel;

	#[test]
	fn test_load_missing_file_returns_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");

		let config = Config::load_from(&path).unwrap();
		assert_eq!(config.responder_url, ConfigDefaults::DEFAULT_RESPONDER_URL);
		assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
		assert!(!path.exists(), "Loading must not create the file");
	}

	#[test]
	fn test_save_then_load() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("config.toml");

		let config = Config {
			log_level: LogLevel::Debug,
			responder_url: "https://chat.example.com/chat/".to_string(),
			max_message_length: 250,
			..Default::default()
		};
		config.save_to(&path).unwrap();

		let loaded = Config::load_from(&path).unwrap();
		assert_eq!(loaded.log_level, LogLevel::Debug);
		assert_eq!(loaded.responder_url, "https://chat.example.com/chat/");
		assert_eq!(loaded.max_message_length, 250);
		assert_eq!(loaded.server, config.server);
	}

	#[test]
	fn test_invalid_toml_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		fs::write(&path, "max_message_length = \"lots\"").unwrap();

		let err = Config::load_from(&path).unwrap_err();
		assert!(err.to_string().contains("Failed to parse TOML configuration"));
	}

	#[test]
	fn test_env_override() {
		let mut config = Config::default();
		config.apply_env_overrides(|key| {
			(key == ConfigDefaults::RESPONDER_URL_ENV).then(|| " http://10.0.0.5/chat/ ".to_string())
		});
		assert_eq!(config.responder_url, "http://10.0.0.5/chat/");

		// Blank values leave the configured endpoint alone
		let mut config = Config::default();
		config.apply_env_overrides(|_| Some("   ".to_string()));
		assert_eq!(config.responder_url, ConfigDefaults::DEFAULT_RESPONDER_URL);
	}
}
