/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
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
use crate::source::provider::Provider;
use serde::Deserialize;

pub const DEFAULT_REPORT_PATH: &str = "README.md";

/// Seoul time, which is when both providers publish
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;
pub const DEFAULT_TIMEZONE_LABEL: &str = "KST";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub source: Option<Source>,
	pub report: Option<Report>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Source {
	pub provider: Option<Provider>,
	pub api_key: Option<String>,
	pub api_key_cmd: Option<String>,

	/// Overrides the provider's endpoint, e.g. for a proxy or a test server
	pub api_url: Option<String>,
	pub timeout_secs: Option<u64>,

	/// How many days before the report date to also search. Only the ECOS
	/// provider can search a range.
	pub lookback_days: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
	pub path: Option<String>,
	pub utc_offset_hours: Option<i32>,
	pub timezone_label: Option<String>,
}

impl Report {
	pub fn utc_offset_hours(&self) -> i32 {
		self.utc_offset_hours.unwrap_or(DEFAULT_UTC_OFFSET_HOURS)
	}

	pub fn timezone_label(&self) -> String {
		self.timezone_label
			.clone()
			.unwrap_or(DEFAULT_TIMEZONE_LABEL.to_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_config() {
		let config: Config = toml::from_str("").unwrap();
		assert!(config.source.is_none());
		assert!(config.report.is_none());

		let report = config.report.unwrap_or_default();
		assert_eq!(report.utc_offset_hours(), 9);
		assert_eq!(report.timezone_label(), "KST");
	}

	#[test]
	fn test_full_config() {
		let config: Config = toml::from_str(
			r#"
			[source]
			provider = "exim"
			api_key = "abc"
			api_url = "http://localhost:1234/rates"
			timeout_secs = 5
			lookback_days = 3

			[report]
			path = "docs/RATES.md"
			utc_offset_hours = 0
			timezone_label = "UTC"
			"#,
		)
		.unwrap();

		let source = config.source.unwrap();
		assert_eq!(source.provider, Some(Provider::Exim));
		assert_eq!(source.api_key.as_deref(), Some("abc"));
		assert_eq!(source.timeout_secs, Some(5));
		assert_eq!(source.lookback_days, Some(3));

		let report = config.report.unwrap();
		assert_eq!(report.path.as_deref(), Some("docs/RATES.md"));
		assert_eq!(report.utc_offset_hours(), 0);
		assert_eq!(report.timezone_label(), "UTC");
	}

	#[test]
	fn test_unknown_provider_rejected() {
		let result: Result<Config, _> =
			toml::from_str("[source]\nprovider = \"fed\"\n");
		assert!(result.is_err());
	}

	#[test]
	fn test_unknown_field_rejected() {
		let result: Result<Config, _> =
			toml::from_str("[report]\nfile = \"README.md\"\n");
		assert!(result.is_err());
	}
}
