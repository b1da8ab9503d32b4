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
use anyhow::{anyhow, bail, Error};
use chrono::{DateTime, Datelike, FixedOffset, Utc};
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Date {
	year: u32,
	month: u8,
	day: u8,
}

impl Date {
	/// Constructor to parse a string in the "YYYY-mm-dd" format
	pub fn from_str(date_str: &str) -> Result<Date, Error> {
		let parts: Vec<&str> = date_str.split('-').collect();
		let shape_ok = parts.len() == 3
			&& parts
				.iter()
				.zip([4, 2, 2])
				.all(|(p, len)| {
					p.len() == len && p.bytes().all(|b| b.is_ascii_digit())
				});
		if !shape_ok {
			bail!("Date format must be YYYY-MM-DD");
		}

		let year = parts[0].parse::<u32>()?;
		let month = parts[1].parse::<u8>()?;
		let day = parts[2].parse::<u8>()?;

		if !Date::is_valid_date(year, month, day) {
			bail!("Invalid date: {}", date_str);
		}

		Ok(Date { year, month, day })
	}

	/// Parses the "YYYYmmdd" form used by the rate APIs.
	pub fn from_compact(date_str: &str) -> Result<Date, Error> {
		if date_str.len() != 8 || !date_str.chars().all(|c| c.is_ascii_digit())
		{
			bail!("Compact date format must be YYYYMMDD");
		}
		Date::from_str(&format!(
			"{}-{}-{}",
			&date_str[..4],
			&date_str[4..6],
			&date_str[6..]
		))
	}

	/// The calendar date of the given instant as seen at a fixed offset from
	/// UTC, in whole hours.
	pub fn at_offset(
		instant: DateTime<Utc>,
		offset_hours: i32,
	) -> Result<Date, Error> {
		let local = instant.with_timezone(&offset(offset_hours)?);
		Ok(Date {
			year: local.year() as u32,
			month: local.month() as u8,
			day: local.day() as u8,
		})
	}

	/// The "YYYYmmdd" form that the rate APIs take in their URLs.
	pub fn compact(&self) -> String {
		format!("{:04}{:02}{:02}", self.year, self.month, self.day)
	}

	/// The previous calendar day. Saturates at 0001-01-01.
	pub fn pred(&self) -> Date {
		if self.day > 1 {
			return Date {
				day: self.day - 1,
				..*self
			};
		}

		if self.month > 1 {
			let month = self.month - 1;
			return Date {
				year: self.year,
				month,
				day: Date::days_in_month(self.year, month),
			};
		}

		if self.year > 1 {
			return Date {
				year: self.year - 1,
				month: 12,
				day: 31,
			};
		}

		*self
	}

	pub fn minus_days(&self, days: u32) -> Date {
		(0..days).fold(*self, |d, _| d.pred())
	}

	fn is_leap_year(year: u32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: u32, month: u8) -> u8 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Date::is_leap_year(year) {
					29
				} else {
					28
				}
			},
			_ => 0, // Invalid month
		}
	}

	fn is_valid_date(year: u32, month: u8, day: u8) -> bool {
		if year == 0 || !(1..=12).contains(&month) {
			return false;
		}
		if day < 1 || day > Date::days_in_month(year, month) {
			return false;
		}
		true
	}
}

/// Builds the fixed offset for a whole number of hours east of UTC.
pub fn offset(offset_hours: i32) -> Result<FixedOffset, Error> {
	offset_hours
		.checked_mul(3600)
		.and_then(FixedOffset::east_opt)
		.ok_or_else(|| anyhow!("UTC offset out of range: {}", offset_hours))
}

impl PartialOrd for Date {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Date {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.year, self.month, self.day).cmp(&(
			other.year,
			other.month,
			other.day,
		))
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_parse_and_display() {
		let date = Date::from_str("2024-11-05").unwrap();
		assert_eq!(date.to_string(), "2024-11-05");
		assert_eq!(date.compact(), "20241105");
	}

	#[test]
	fn test_from_compact() {
		let date = Date::from_compact("20240229").unwrap();
		assert_eq!(date, Date::from_str("2024-02-29").unwrap());
		assert!(Date::from_compact("20230229").is_err());
		assert!(Date::from_compact("2024-02-2").is_err());
		assert!(Date::from_compact("202402").is_err());
	}

	#[test]
	fn test_invalid_dates() {
		assert!(Date::from_str("2024-13-01").is_err());
		assert!(Date::from_str("2023-02-29").is_err());
		assert!(Date::from_str("2024/01/01").is_err());
		assert!(Date::from_str("0000-01-01").is_err());
		assert!(Date::from_str("yesterday").is_err());
	}

	#[test]
	fn test_date_shape_enforced() {
		assert!(Date::from_str("20241-01-05").is_err());
		assert!(Date::from_str("+2024-01-05").is_err());
		assert!(Date::from_str("2024-1-5").is_err());
		assert!(Date::from_str("2024-01-+5").is_err());
		assert!(Date::from_str("2024-01-05 ").is_err());
	}

	#[test]
	fn test_pred_within_month() {
		let date = Date::from_str("2024-11-15").unwrap();
		assert_eq!(date.pred(), Date::from_str("2024-11-14").unwrap());
	}

	#[test]
	fn test_pred_across_month_and_year() {
		let leap = Date::from_str("2024-03-01").unwrap();
		assert_eq!(leap.pred(), Date::from_str("2024-02-29").unwrap());

		let common = Date::from_str("2023-03-01").unwrap();
		assert_eq!(common.pred(), Date::from_str("2023-02-28").unwrap());

		let new_year = Date::from_str("2025-01-01").unwrap();
		assert_eq!(new_year.pred(), Date::from_str("2024-12-31").unwrap());
	}

	#[test]
	fn test_minus_days() {
		let date = Date::from_str("2024-01-03").unwrap();
		assert_eq!(date.minus_days(0), date);
		assert_eq!(date.minus_days(7), Date::from_str("2023-12-27").unwrap());
	}

	#[test]
	fn test_at_offset_rolls_over_midnight() {
		// 16:30 UTC is already the next morning in Seoul
		let instant = Utc.with_ymd_and_hms(2024, 12, 31, 16, 30, 0).unwrap();
		assert_eq!(
			Date::at_offset(instant, 9).unwrap(),
			Date::from_str("2025-01-01").unwrap()
		);
		assert_eq!(
			Date::at_offset(instant, 0).unwrap(),
			Date::from_str("2024-12-31").unwrap()
		);
	}

	#[test]
	fn test_offset_out_of_range() {
		assert!(offset(25).is_err());
		assert!(offset(-9).is_ok());
	}

	#[test]
	fn test_offset_overflow_is_error() {
		assert!(offset(1_193_047).is_err());
		assert!(offset(i32::MIN).is_err());
		assert!(Date::at_offset(Utc::now(), i32::MAX).is_err());
	}
}
