/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::{Config, Source};
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable holding the API key when the config has none. Also
/// read from a `.env` file in the working directory.
pub const API_KEY_ENV: &str = "EXCHANGE_RATE";

/// Fetches the config from the given path, or the default path if none.
/// A missing file at the default location is an empty config; a missing
/// file that was asked for by name is an error.
pub fn get_config(custom_config_path: Option<&String>) -> Result<Config, Error> {
	let config_path = match custom_config_path {
		None => match home_dir() {
			Some(home) => home.join(".config/fxstatus/config.toml"),
			None => {
				debug!("no home directory; using empty config");
				return Ok(Config::default());
			},
		},
		Some(p) => PathBuf::from(p),
	};

	if !config_path.exists() && custom_config_path.is_none() {
		debug!("no config at {}", config_path.display());
		return Ok(Config::default());
	}

	let content = fs::read_to_string(&config_path).map_err(|e| {
		anyhow!("failed to read config {}: {}", config_path.display(), e)
	})?;
	let config: Config = toml::from_str(&content)
		.map_err(|e| anyhow!("failed to parse config: {}", e))?;

	Ok(config)
}

/// Resolves the API key from, in order: `source.api_key`, the output of
/// `source.api_key_cmd`, then the given environment value.
pub fn resolve_api_key(
	source: &Source,
	env_key: Option<String>,
) -> Result<String, Error> {
	if source.api_key_cmd.is_some() && source.api_key.is_some() {
		bail!("Only one of source.api_key and source.api_key_cmd may be specified")
	}

	if let Some(api_key) = &source.api_key {
		let key = api_key.trim();
		if key.is_empty() {
			bail!("source.api_key is empty");
		}
		return Ok(key.to_string());
	}

	if let Some(api_key_cmd) = &source.api_key_cmd {
		let output = Command::new("sh")
			.arg("-c")
			.arg(api_key_cmd)
			.output()
			.map_err(|e| anyhow!("failed to execute api_key_cmd: {}", e))?;

		if !output.status.success() {
			bail!(
				"api_key_cmd failed with status {}: {}",
				output.status,
				String::from_utf8_lossy(&output.stderr)
			);
		}

		let key = String::from_utf8(output.stdout)
			.map_err(|e| anyhow!("failed to parse command output: {}", e))?
			.trim()
			.to_string();
		if key.is_empty() {
			bail!("api_key_cmd printed nothing");
		}
		return Ok(key);
	}

	match env_key.map(|k| k.trim().to_string()) {
		Some(key) if !key.is_empty() => Ok(key),
		_ => bail!(
			"No API key: set {} (environment or .env) or source.api_key in config",
			API_KEY_ENV
		),
	}
}

/// Overwrites the report file with the given content, creating parent
/// directories as needed.
pub fn write_report(path: &Path, content: &str) -> Result<(), Error> {
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}

	fs::write(path, content)
		.map_err(|e| anyhow!("failed to write {}: {}", path.display(), e))?;
	info!("wrote {} bytes to {}", content.len(), path.display());
	Ok(())
}
