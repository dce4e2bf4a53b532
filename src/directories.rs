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

// Directory utilities for cross-platform data directory management

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the system-wide data directory for chatdesk
///
/// - macOS: ~/.local/share/chatdesk
/// - Linux: ~/.local/share/chatdesk (following XDG Base Directory specification)
/// - Windows: %LOCALAPPDATA%/chatdesk
pub fn get_chatdesk_data_dir() -> Result<PathBuf> {
	let home = dirs::home_dir().context("Unable to determine home directory")?;

	#[cfg(target_os = "windows")]
	let base = dirs::data_local_dir().unwrap_or_else(|| home.join("AppData").join("Local"));

	#[cfg(not(target_os = "windows"))]
	let base = home.join(".local").join("share");

	data_dir_in(&base)
}

/// Get the configuration directory path
pub fn get_config_dir() -> Result<PathBuf> {
	ensure_dir(get_chatdesk_data_dir()?.join("config"))
}

/// Get the default configuration file path
pub fn get_config_file_path() -> Result<PathBuf> {
	Ok(get_config_dir()?.join("config.toml"))
}

/// `<base>/chatdesk`, created if missing
pub fn data_dir_in(base: &Path) -> Result<PathBuf> {
	ensure_dir(base.join("chatdesk"))
}

/// `<base>/chatdesk/config/config.toml`; the parent directories are created
pub fn config_file_path_in(base: &Path) -> Result<PathBuf> {
	let config_dir = ensure_dir(data_dir_in(base)?.join("config"))?;
	Ok(config_dir.join("config.toml"))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
	if !dir.exists() {
		fs::create_dir_all(&dir).context(format!(
			"Failed to create directory: {}",
			dir.display()
		))?;
	}
	Ok(dir)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_config_file_path_layout() {
		let base = tempfile::tempdir().unwrap();
		let config_path = config_file_path_in(base.path()).unwrap();

		assert_eq!(
			config_path,
			base.path().join("chatdesk").join("config").join("config.toml")
		);
		assert!(config_path.parent().unwrap().is_dir());
		assert!(!config_path.exists());
	}

	#[test]
	fn test_existing_directories_are_reused() {
		let base = tempfile::tempdir().unwrap();
		let first = data_dir_in(base.path()).unwrap();
		fs::write(first.join("marker"), "kept").unwrap();

		let second = data_dir_in(base.path()).unwrap();
		assert_eq!(first, second);
		assert_eq!(fs::read_to_string(second.join("marker")).unwrap(), "kept");
	}
}
