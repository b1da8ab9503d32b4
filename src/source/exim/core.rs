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
use crate::source::exim::models::{ExchangeParams, ExchangeRate};
use crate::source::http::Client;
use crate::util::date::Date;
use log::warn;

pub const EXIM_API_URL: &str =
	"https://oapi.koreaexim.go.kr/site/program/financial/exchangeJSON";

const DATA_CODE: &str = "AP01";

/// Reads base rates from the Korea Eximbank exchange API. Each request
/// returns every currency for one date; weekends and holidays return none.
pub struct EximSource {
	http: Client,
	api_key: String,
}

impl EximSource {
	pub fn new(http: Client, api_key: String) -> Self {
		Self { http, api_key }
	}
}

impl RateSource for EximSource {
	fn label(&self) -> &'static str {
		"한국수출입은행 Open API"
	}

	fn fetch(&self, currency: &Currency, date: &Date) -> RateStatus {
		let params = ExchangeParams {
			authkey: self.api_key.clone(),
			searchdate: date.compact(),
			data: DATA_CODE,
		};

		match self.http.get::<_, Vec<ExchangeRate>>("", Some(params)) {
			Ok(rates) => interpret(currency, &rates, date),
			Err(e) => {
				warn!("Eximbank {} on {}: {}", currency.code, date, e);
				RateStatus::Failed(e.to_string())
			},
		}
	}
}

fn interpret(
	currency: &Currency,
	rates: &[ExchangeRate],
	date: &Date,
) -> RateStatus {
	if let Some(failed) = rates.iter().find(|r| r.result != ExchangeRate::SUCCESS)
	{
		return RateStatus::Failed(failed.failure());
	}

	rates
		.iter()
		.find(|r| r.cur_unit.as_deref() == Some(currency.exim_unit))
		.and_then(|r| r.deal_bas_r.as_deref())
		.map(|value| RateStatus::found(value, Some(*date)))
		.unwrap_or(RateStatus::NotFound)
}
