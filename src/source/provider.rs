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
use crate::config::config_file::{Source, DEFAULT_TIMEOUT_SECS};
use crate::rates::status::RateSource;
use crate::source::ecos::core::{EcosSource, ECOS_API_URL};
use crate::source::exim::core::{EximSource, EXIM_API_URL};
use crate::source::http::Client;
use anyhow::{bail, Error};
use clap::ValueEnum;
use log::warn;
use serde::Deserialize;
use std::time::Duration;

/// The upstream APIs rates can be read from.
#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
	/// https://ecos.bok.or.kr/
	#[default]
	Ecos,
	/// https://www.koreaexim.go.kr/
	Exim,
}

/// Upper bound on `lookback_days`; ECOS returns at most one page of rows.
pub const MAX_LOOKBACK_DAYS: u32 = 31;

impl Provider {
	pub fn default_url(&self) -> &'static str {
		match self {
			Provider::Ecos => ECOS_API_URL,
			Provider::Exim => EXIM_API_URL,
		}
	}

	/// Builds the rate source for this provider from the source config.
	/// The lookback argument, when set, overrides the config's.
	pub fn build(
		&self,
		config: &Source,
		api_key: String,
		lookback_days: Option<u32>,
	) -> Result<Box<dyn RateSource>, Error> {
		let api_url = config
			.api_url
			.clone()
			.unwrap_or(self.default_url().to_owned());
		let timeout = Duration::from_secs(
			config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		);
		let lookback = lookback_days.or(config.lookback_days).unwrap_or(0);
		if lookback > MAX_LOOKBACK_DAYS {
			bail!("Maximum lookback is {} days", MAX_LOOKBACK_DAYS);
		}

		let http = Client::new(&api_url, &api_key, timeout)?;

		Ok(match self {
			Provider::Ecos => Box::new(EcosSource::new(http, api_key, lookback)),
			Provider::Exim => {
				if lookback > 0 {
					warn!("lookback is not supported by the exim provider; ignoring");
				}
				Box::new(EximSource::new(http, api_key))
			},
		})
	}
}
