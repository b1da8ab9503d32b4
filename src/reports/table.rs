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
use unicode_width::UnicodeWidthStr;

/// Markdown table builder for reports that list one line per currency.
/// Cells are padded to a common display width, counting wide (e.g. Hangul)
/// characters as two columns, so the raw file reads as a table too.
pub struct Table {
	column_count: usize,
	header: Vec<String>,
	rows: Vec<Vec<String>>,
	right_align: Vec<bool>, // indicates columns by index
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			header: vec![String::new(); column_count],
			rows: Vec::new(),
			right_align: vec![false; column_count],
		}
	}

	/// Sets the header row.
	pub fn add_header(&mut self, row: Vec<&str>) {
		self.header = self.fit(row);
	}

	/// Adds a data row. Missing cells are blank; extra cells are dropped.
	pub fn add_row(&mut self, row: Vec<&str>) {
		let row = self.fit(row);
		self.rows.push(row);
	}

	/// Specifies columns that should be right-aligned by index.
	pub fn right_align(&mut self, cols: Vec<usize>) {
		for col in cols {
			if col < self.column_count {
				self.right_align[col] = true;
			}
		}
	}

	pub fn render(&self) -> String {
		// at least three dashes in each delimiter cell
		let mut max_widths = vec![3; self.column_count];
		for row in std::iter::once(&self.header).chain(&self.rows) {
			for (i, value) in row.iter().enumerate() {
				max_widths[i] = max_widths[i].max(value.width());
			}
		}

		let mut out = String::new();
		out.push_str(&self.render_row(&max_widths, &self.header));
		out.push_str(&self.render_delimiter(&max_widths));
		for row in &self.rows {
			out.push_str(&self.render_row(&max_widths, row));
		}
		out
	}

	fn fit(&self, row: Vec<&str>) -> Vec<String> {
		let mut cells: Vec<String> = row
			.into_iter()
			.take(self.column_count)
			.map(|s| s.replace('|', "\\|"))
			.collect();
		cells.resize(self.column_count, String::new());
		cells
	}

	fn render_row(&self, max_widths: &[usize], row: &[String]) -> String {
		let cells: Vec<String> = row
			.iter()
			.enumerate()
			.map(|(i, value)| {
				let pad = max_widths[i] - value.width();
				if self.right_align[i] {
					format!("{}{}", " ".repeat(pad), value)
				} else {
					format!("{}{}", value, " ".repeat(pad))
				}
			})
			.collect();
		format!("| {} |\n", cells.join(" | "))
	}

	fn render_delimiter(&self, max_widths: &[usize]) -> String {
		let cells: Vec<String> = max_widths
			.iter()
			.enumerate()
			.map(|(i, width)| {
				if self.right_align[i] {
					format!("{}:", "-".repeat(width - 1))
				} else {
					"-".repeat(*width)
				}
			})
			.collect();
		format!("| {} |\n", cells.join(" | "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render() {
		let mut table = Table::new(3);
		table.add_header(vec!["Code", "Rate", "Δ"]);
		table.right_align(vec![1, 2]);
		table.add_row(vec!["USD", "1,398.8", "▼ 6.30"]);
		table.add_row(vec!["EUR"]);

		let expected = concat!(
			"| Code |    Rate |      Δ |\n",
			"| ---- | ------: | -----: |\n",
			"| USD  | 1,398.8 | ▼ 6.30 |\n",
			"| EUR  |         |        |\n",
		);
		assert_eq!(table.render(), expected);
	}

	#[test]
	fn test_wide_characters_padded_by_display_width() {
		let mut table = Table::new(2);
		table.add_header(vec!["통화", "Rate"]);
		table.add_row(vec!["USD", "1"]);
		table.add_row(vec!["유로(EUR)", "2"]);

		let expected = concat!(
			"| 통화      | Rate |\n",
			"| --------- | ---- |\n",
			"| USD       | 1    |\n",
			"| 유로(EUR) | 2    |\n",
		);
		assert_eq!(table.render(), expected);
	}

	#[test]
	fn test_pipes_escaped() {
		let mut table = Table::new(1);
		table.add_header(vec!["a|b"]);
		assert_eq!(table.render(), "| a\\|b |\n| ---- |\n");
	}
}
