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
use crate::config::config_file::DEFAULT_REPORT_PATH;
use crate::rates::currency::Currency;
use crate::rates::status::Snapshot;
use crate::reports::readme_reporter::ReadmeReporter;
use crate::source::provider::{Provider, MAX_LOOKBACK_DAYS};
use crate::util::date::{offset, Date};
use crate::util::filesystem::{
	get_config, resolve_api_key, write_report, API_KEY_ENV,
};
use anyhow::{bail, Error};
use chrono::Utc;
use clap::Parser;
use log::info;
use std::env;
use std::path::Path;

mod config;
mod rates;
mod reports;
mod source;
mod util;

#[derive(Parser)]
#[command(
	name = "fxstatus",
	version,
	about = "Writes today's exchange rates into a README status report"
)]
struct Cli {
	/// Report file to overwrite (default: report.path in config, else README.md)
	#[arg(short, long)]
	output: Option<String>,

	/// Custom config file location (default: ~/.config/fxstatus/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Report rates for this date instead of today (YYYY-MM-DD)
	#[arg(short, long)]
	date: Option<String>,

	/// Which API to read rates from (default: source.provider in config, else ecos)
	#[arg(long, value_enum)]
	provider: Option<Provider>,

	/// Also fetch the previous day and report the change
	#[arg(long)]
	compare: bool,

	/// Also search this many days back when the date has no rate (ecos only)
	#[arg(long)]
	lookback: Option<u32>,

	/// Print the report instead of writing the file
	#[arg(long)]
	stdout: bool,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if let Some(date) = &self.date {
			Date::from_str(date)?;
		}

		if let Some(lookback) = self.lookback {
			if lookback > MAX_LOOKBACK_DAYS {
				bail!("Maximum lookback is {} days", MAX_LOOKBACK_DAYS);
			}
		}

		Ok(())
	}
}

fn main() -> Result<(), Error> {
	dotenvy::dotenv().ok();
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("warn"),
	)
	.init();

	let args = Cli::parse();
	args.validate()?;

	let config = get_config(args.config.as_ref())?;
	let source_config = config.source.unwrap_or_default();
	let report_config = config.report.unwrap_or_default();

	let provider = args
		.provider
		.or(source_config.provider)
		.unwrap_or_default();
	let api_key = resolve_api_key(&source_config, env::var(API_KEY_ENV).ok())?;
	let source = provider.build(&source_config, api_key, args.lookback)?;

	// one clock reading for both the report date and its timestamp
	let offset_hours = report_config.utc_offset_hours();
	let now = Utc::now();
	let date = match &args.date {
		Some(d) => Date::from_str(d)?,
		None => Date::at_offset(now, offset_hours)?,
	};

	info!("fetching {:?} rates for {}", provider, date);
	let snapshot =
		Snapshot::collect(source.as_ref(), Currency::all(), date, args.compare);

	let reporter = ReadmeReporter::new(
		snapshot,
		now.with_timezone(&offset(offset_hours)?),
		report_config.timezone_label(),
	);
	let content = reporter.render();

	if args.stdout {
		print!("{}", content);
		return Ok(());
	}

	let path = args
		.output
		.or(report_config.path)
		.unwrap_or(DEFAULT_REPORT_PATH.to_owned());
	write_report(Path::new(&path), &content)?;
	println!("Wrote {}", path);

	Ok(())
}
