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

/// One of the currencies the report covers, with the identifiers each
/// provider uses for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Currency {
	/// ISO 4217 code
	pub code: &'static str,
	pub display_name: &'static str,
	/// Item code within the ECOS 731Y001 table (won per unit)
	pub ecos_item: &'static str,
	/// `cur_unit` in Eximbank responses
	pub exim_unit: &'static str,
}

// Both providers quote the yen per 100 units.
const CURRENCIES: [Currency; 3] = [
	Currency {
		code: "USD",
		display_name: "미국 달러(USD)",
		ecos_item: "0000001",
		exim_unit: "USD",
	},
	Currency {
		code: "JPY",
		display_name: "일본 엔(JPY)",
		ecos_item: "0000002",
		exim_unit: "JPY(100)",
	},
	Currency {
		code: "EUR",
		display_name: "유로(EUR)",
		ecos_item: "0000003",
		exim_unit: "EUR",
	},
];

impl Currency {
	/// Every reported currency, in report order.
	pub fn all() -> &'static [Currency] {
		&CURRENCIES
	}

	#[cfg(test)]
	pub fn from_code(code: &str) -> Option<Currency> {
		CURRENCIES
			.iter()
			.find(|c| c.code.eq_ignore_ascii_case(code))
			.copied()
	}
}
