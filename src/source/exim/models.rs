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
use serde::{Deserialize, Serialize};

// -------------
// -- SENDING --
// -------------

#[derive(Debug, Serialize)]
pub struct ExchangeParams {
	pub authkey: String,
	/// "YYYYmmdd"
	pub searchdate: String,
	/// AP01 is the exchange rate table
	pub data: &'static str,
}

// ---------------
// -- RECEIVING --
// ---------------

/// One currency's rates on the searched date. On failure the API sends a
/// single entry carrying only the result code.
#[derive(Deserialize, Debug)]
pub struct ExchangeRate {
	pub result: i64,
	pub cur_unit: Option<String>,

	/// Basic rate, with thousands separators, e.g. "1,398.8"
	pub deal_bas_r: Option<String>,
}

impl ExchangeRate {
	pub const SUCCESS: i64 = 1;

	/// Describes a non-success result code.
	pub fn failure(&self) -> String {
		match self.result {
			2 => "DATA 코드 오류".to_string(),
			3 => "인증 코드 오류".to_string(),
			4 => "일일 제한 횟수 마감".to_string(),
			n => format!("result {}", n),
		}
	}
}
