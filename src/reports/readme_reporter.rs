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
use crate::rates::status::{RateStatus, Snapshot, SnapshotRow};
use crate::reports::table::Table;
use chrono::{DateTime, FixedOffset};

/// Renders a snapshot of rates as the repository's README.
pub struct ReadmeReporter {
	snapshot: Snapshot,
	updated_at: DateTime<FixedOffset>,
	timezone_label: String,
}

impl ReadmeReporter {
	pub fn new(
		snapshot: Snapshot,
		updated_at: DateTime<FixedOffset>,
		timezone_label: String,
	) -> Self {
		Self {
			snapshot,
			updated_at,
			timezone_label,
		}
	}

	pub fn render(&self) -> String {
		let rates = match self.snapshot.previous_date {
			None => self.quote_section(),
			Some(_) => self.comparison_section(),
		};

		format!(
			"
# Exchange Rate API Status

이 리포지토리는 {}를 사용하여 주요 국가(미국, 일본, 유럽)의 환율 정보를 자동으로 업데이트합니다.

## 📊 오늘의 환율 (매매 기준율)
{}
⏳ 업데이트 시간: {} ({})

---
자동 업데이트 봇에 의해 관리됩니다.
",
			self.snapshot.source_label,
			rates,
			self.updated_at.format("%Y-%m-%d %H:%M:%S"),
			self.timezone_label,
		)
	}

	/// One quoted line per currency.
	fn quote_section(&self) -> String {
		let lines: Vec<String> = self
			.snapshot
			.rows
			.iter()
			.map(|row| {
				let mut line =
					format!("{}: {}", row.currency.display_name, row.current);
				// a lookback can land on an earlier business day
				if let RateStatus::Found {
					observed: Some(observed),
					..
				} = &row.current
				{
					if *observed != self.snapshot.date {
						line.push_str(&format!(" ({} 기준)", observed));
					}
				}
				line
			})
			.collect();

		format!("> {}\n", lines.join("\n> "))
	}

	/// A table of both dates and the change between them.
	fn comparison_section(&self) -> String {
		let previous_date = self
			.snapshot
			.previous_date
			.map(|d| d.to_string())
			.unwrap_or_default();

		let mut table = Table::new(4);
		table.add_header(vec![
			"통화",
			&self.snapshot.date.to_string(),
			&previous_date,
			"변동",
		]);
		table.right_align(vec![1, 2, 3]);

		for row in &self.snapshot.rows {
			let previous = row.previous.as_ref().map(|p| p.cell());
			table.add_row(vec![
				row.currency.display_name,
				&row.current.cell(),
				previous.as_deref().unwrap_or("-"),
				&change(row),
			]);
		}

		table.render()
	}
}

fn change(row: &SnapshotRow) -> String {
	match row.change() {
		None => String::new(),
		Some(diff) if diff.abs() < 0.005 => "-".to_string(),
		Some(diff) if diff > 0.0 => format!("▲ {:.2}", diff),
		Some(diff) => format!("▼ {:.2}", diff.abs()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rates::currency::Currency;
	use crate::util::date::Date;
	use chrono::TimeZone;

	fn updated_at() -> DateTime<FixedOffset> {
		FixedOffset::east_opt(9 * 3600)
			.unwrap()
			.with_ymd_and_hms(2024, 11, 15, 11, 5, 9)
			.unwrap()
	}

	fn row(code: &str, current: RateStatus, previous: Option<RateStatus>) -> SnapshotRow {
		SnapshotRow {
			currency: Currency::from_code(code).unwrap(),
			current,
			previous,
		}
	}

	fn date(s: &str) -> Date {
		Date::from_str(s).unwrap()
	}

	#[test]
	fn test_single_date_report() {
		let snapshot = Snapshot {
			source_label: "한국은행 Open API",
			date: date("2024-11-15"),
			previous_date: None,
			rows: vec![
				row("USD", RateStatus::found("1398.8", Some(date("2024-11-15"))), None),
				row("JPY", RateStatus::NotFound, None),
				row("EUR", RateStatus::Failed("status 500".to_string()), None),
			],
		};

		let reporter = ReadmeReporter::new(snapshot, updated_at(), "KST".to_string());
		let expected = "
# Exchange Rate API Status

이 리포지토리는 한국은행 Open API를 사용하여 주요 국가(미국, 일본, 유럽)의 환율 정보를 자동으로 업데이트합니다.

## 📊 오늘의 환율 (매매 기준율)
> 미국 달러(USD): 1398.8 원
> 일본 엔(JPY): 데이터를 찾을 수 없습니다.
> 유로(EUR): 요청 실패 (status 500)

⏳ 업데이트 시간: 2024-11-15 11:05:09 (KST)

---
자동 업데이트 봇에 의해 관리됩니다.
";
		assert_eq!(reporter.render(), expected);
	}

	#[test]
	fn test_earlier_observation_is_marked() {
		let snapshot = Snapshot {
			source_label: "한국은행 Open API",
			date: date("2024-11-17"),
			previous_date: None,
			rows: vec![row(
				"USD",
				RateStatus::found("1398.8", Some(date("2024-11-15"))),
				None,
			)],
		};

		let out = ReadmeReporter::new(snapshot, updated_at(), "KST".to_string())
			.render();
		assert!(out.contains("> 미국 달러(USD): 1398.8 원 (2024-11-15 기준)\n"));
	}

	#[test]
	fn test_comparison_report() {
		let snapshot = Snapshot {
			source_label: "한국수출입은행 Open API",
			date: date("2024-11-15"),
			previous_date: Some(date("2024-11-14")),
			rows: vec![
				row(
					"USD",
					RateStatus::found("1,398.8", None),
					Some(RateStatus::found("1,405.1", None)),
				),
				row(
					"JPY",
					RateStatus::found("900.63", None),
					Some(RateStatus::found("898.4", None)),
				),
				row(
					"EUR",
					RateStatus::found("1,475.2", None),
					Some(RateStatus::NotFound),
				),
			],
		};

		let out = ReadmeReporter::new(snapshot, updated_at(), "KST".to_string())
			.render();

		assert!(out.contains("이 리포지토리는 한국수출입은행 Open API를 사용하여"));
		let expected_table = concat!(
			"| 통화           | 2024-11-15 | 2024-11-14 |   변동 |\n",
			"| -------------- | ---------: | ---------: | -----: |\n",
			"| 미국 달러(USD) |    1,398.8 |    1,405.1 | ▼ 6.30 |\n",
			"| 일본 엔(JPY)   |     900.63 |      898.4 | ▲ 2.23 |\n",
			"| 유로(EUR)      |    1,475.2 |          - |        |\n",
		);
		assert!(out.contains(expected_table));
		assert!(!out.contains("> "));
	}

	#[test]
	fn test_unchanged_rate() {
		let r = row(
			"USD",
			RateStatus::found("1398.80", None),
			Some(RateStatus::found("1,398.8", None)),
		);
		assert_eq!(change(&r), "-");

		let missing = row("USD", RateStatus::NotFound, None);
		assert_eq!(change(&missing), "");
	}
}
