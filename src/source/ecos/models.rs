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
use serde::Deserialize;

/// Result code ECOS answers with when the query matched no rows.
pub const NO_DATA_CODE: &str = "INFO-200";

// ---------------
// -- RECEIVING --
// ---------------

/// ECOS answers either with the statistic rows or with a bare result code,
/// always under HTTP 200.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
	#[serde(rename = "StatisticSearch")]
	pub statistic_search: Option<StatisticSearch>,

	#[serde(rename = "RESULT")]
	pub result: Option<ApiResult>,
}

#[derive(Deserialize, Debug)]
pub struct StatisticSearch {
	#[serde(default)]
	pub row: Vec<Row>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Row {
	/// "YYYYmmdd" for the daily cycle
	pub time: String,
	pub data_value: String,
	pub item_name1: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ApiResult {
	pub code: String,
	pub message: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rows() {
		let body = r#"{"StatisticSearch":{"list_total_count":2,"row":[
			{"STAT_CODE":"731Y001","ITEM_CODE1":"0000001","ITEM_NAME1":"원/미국달러(매매기준율)","UNIT_NAME":"원 ","TIME":"20241114","DATA_VALUE":"1405.1"},
			{"STAT_CODE":"731Y001","ITEM_CODE1":"0000001","ITEM_NAME1":"원/미국달러(매매기준율)","UNIT_NAME":"원 ","TIME":"20241115","DATA_VALUE":"1398.8"}
		]}}"#;
		let resp: SearchResponse = serde_json::from_str(body).unwrap();
		assert!(resp.result.is_none());

		let rows = resp.statistic_search.unwrap().row;
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[1].time, "20241115");
		assert_eq!(rows[1].data_value, "1398.8");
		assert_eq!(
			rows[0].item_name1.as_deref(),
			Some("원/미국달러(매매기준율)")
		);
	}

	#[test]
	fn test_result_code() {
		let body = r#"{"RESULT":{"CODE":"INFO-200","MESSAGE":"해당하는 데이터가 없습니다."}}"#;
		let resp: SearchResponse = serde_json::from_str(body).unwrap();
		assert!(resp.statistic_search.is_none());
		assert_eq!(resp.result.unwrap().code, NO_DATA_CODE);
	}
}
