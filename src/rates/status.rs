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
use crate::util::date::Date;
use std::fmt;

/// Outcome of asking a provider for one currency on one date. Failures are
/// values here; the report shows them in place of the rate.
#[derive(Clone, Debug, PartialEq)]
pub enum RateStatus {
	Found {
		/// The base rate as the provider published it
		value: String,
		/// The date the provider attributes the rate to, when it says
		observed: Option<Date>,
	},
	NotFound,
	Failed(String),
}

impl RateStatus {
	pub fn found(value: &str, observed: Option<Date>) -> Self {
		RateStatus::Found {
			value: value.trim().to_string(),
			observed,
		}
	}

	/// The rate as a number, ignoring thousands separators.
	pub fn numeric(&self) -> Option<f64> {
		match self {
			RateStatus::Found { value, .. } => {
				value.replace(',', "").parse::<f64>().ok()
			},
			_ => None,
		}
	}

	/// The short form used in table cells.
	pub fn cell(&self) -> String {
		match self {
			RateStatus::Found { value, .. } => value.clone(),
			RateStatus::NotFound => "-".to_string(),
			RateStatus::Failed(reason) => format!("요청 실패 ({})", reason),
		}
	}
}

impl fmt::Display for RateStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RateStatus::Found { value, .. } => write!(f, "{} 원", value),
			RateStatus::NotFound => write!(f, "데이터를 찾을 수 없습니다."),
			RateStatus::Failed(reason) => write!(f, "요청 실패 ({})", reason),
		}
	}
}

/// Anything that can look up the base rate of a currency on a date.
pub trait RateSource {
	/// Human-readable name of the upstream API, as shown in the report.
	fn label(&self) -> &'static str;

	fn fetch(&self, currency: &Currency, date: &Date) -> RateStatus;
}

/// The rates of every currency, on the report date and optionally on the
/// date before it.
pub struct Snapshot {
	pub source_label: &'static str,
	pub date: Date,
	pub rows: Vec<SnapshotRow>,
	pub previous_date: Option<Date>,
}

pub struct SnapshotRow {
	pub currency: Currency,
	pub current: RateStatus,
	pub previous: Option<RateStatus>,
}

impl Snapshot {
	/// Queries the source once per currency per date, in report order.
	pub fn collect(
		source: &dyn RateSource,
		currencies: &[Currency],
		date: Date,
		compare: bool,
	) -> Snapshot {
		let previous_date = if compare { Some(date.pred()) } else { None };

		let rows = currencies
			.iter()
			.map(|currency| SnapshotRow {
				currency: *currency,
				current: source.fetch(currency, &date),
				previous: previous_date.map(|p| source.fetch(currency, &p)),
			})
			.collect();

		Snapshot {
			source_label: source.label(),
			date,
			rows,
			previous_date,
		}
	}
}

impl SnapshotRow {
	/// Difference between the current and previous rates, when both exist.
	pub fn change(&self) -> Option<f64> {
		let previous = self.previous.as_ref()?.numeric()?;
		Some(self.current.numeric()? - previous)
	}
}
