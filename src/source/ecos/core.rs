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
use crate::rates::currency::Currency;
use crate::rates::status::{RateSource, RateStatus};
use crate::source::ecos::models::{SearchResponse, NO_DATA_CODE};
use crate::source::http::Client;
use crate::util::date::Date;
use log::{debug, warn};

pub const ECOS_API_URL: &str = "https://ecos.bok.or.kr/api/StatisticSearch";

/// Won per unit of foreign currency, basic rate (매매기준율)
const STAT_CODE: &str = "731Y001";
const CYCLE: &str = "D";
const FORMAT: &str = "json";
const LANG: &str = "kr";

/// ECOS pages results; this covers any lookback we allow
const START_COUNT: u32 = 1;
const END_COUNT: u32 = 100;

/// Reads base rates from the Bank of Korea's ECOS statistics API. The key
/// is part of the URL path rather than a header.
pub struct EcosSource {
	http: Client,
	api_key: String,

	/// Days before the requested date that are also searched, so that a
	/// weekend or holiday reports the most recent business day instead
	lookback_days: u32,
}

impl EcosSource {
	pub fn new(http: Client, api_key: String, lookback_days: u32) -> Self {
		Self {
			http,
			api_key,
			lookback_days,
		}
	}

	fn path(&self, currency: &Currency, date: &Date) -> String {
		let start = date.minus_days(self.lookback_days);
		format!(
			"{}/{}/{}/{}/{}/{}/{}/{}/{}/{}",
			self.api_key,
			FORMAT,
			LANG,
			START_COUNT,
			END_COUNT,
			STAT_CODE,
			CYCLE,
			start.compact(),
			date.compact(),
			currency.ecos_item,
		)
	}
}

impl RateSource for EcosSource {
	fn label(&self) -> &'static str {
		"한국은행 Open API"
	}

	fn fetch(&self, currency: &Currency, date: &Date) -> RateStatus {
		let path = self.path(currency, date);
		match self.http.get::<(), SearchResponse>(&path, None) {
			Ok(resp) => interpret(resp),
			Err(e) => {
				warn!("ECOS {} on {}: {}", currency.code, date, e);
				RateStatus::Failed(e.to_string())
			},
		}
	}
}

/// Turns a decoded response into a status. Rows come back in date order,
/// so the last one is the latest observation.
fn interpret(resp: SearchResponse) -> RateStatus {
	if let Some(rows) = resp.statistic_search.map(|s| s.row) {
		return match rows.last() {
			Some(row) => {
				debug!(
					"{} {} = {}",
					row.item_name1.as_deref().unwrap_or(STAT_CODE),
					row.time,
					row.data_value
				);
				RateStatus::found(
					&row.data_value,
					Date::from_compact(&row.time).ok(),
				)
			},
			None => RateStatus::NotFound,
		};
	}

	match resp.result {
		Some(result) if result.code == NO_DATA_CODE => RateStatus::NotFound,
		Some(result) => {
			RateStatus::Failed(format!("{}: {}", result.code, result.message))
		},
		None => RateStatus::NotFound,
	}
}
