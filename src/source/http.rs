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
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Why a request produced no usable response body.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("status {0}")]
	Status(u16),

	#[error("request error: {0}")]
	Transport(reqwest::Error),

	#[error("invalid response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
	fn from(e: reqwest::Error) -> Self {
		// the URL can carry the API key
		FetchError::Transport(e.without_url())
	}
}

pub struct Client {
	client: reqwest::blocking::Client,
	base_url: String,

	/// Masked out of anything logged
	secret: String,
}

impl Client {
	pub fn new(
		base_url: &str,
		secret: &str,
		timeout: Duration,
	) -> Result<Self, anyhow::Error> {
		Ok(Client {
			client: reqwest::blocking::Client::builder()
				.timeout(timeout)
				.build()?,
			base_url: base_url.trim_end_matches('/').to_string(),
			secret: secret.to_string(),
		})
	}

	/// Sends a GET to `base_url/path` (or `base_url` itself for an empty
	/// path) and decodes the JSON body. Errors on non-2xx response codes.
	pub fn get<Q, R>(
		&self,
		path: &str,
		query_params: Option<Q>,
	) -> Result<R, FetchError>
	where
		Q: Serialize,
		R: DeserializeOwned,
	{
		let url = if path.is_empty() {
			self.base_url.clone()
		} else {
			format!("{}/{}", self.base_url, path.trim_start_matches('/'))
		};

		let mut request = self.client.get(&url);
		if let Some(query_params) = query_params {
			request = request.query(&query_params);
		}

		info!("Sending GET to {}", self.redact(&url));
		let response = request.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status.as_u16()));
		}

		let body = response.text()?;
		debug!("{} bytes from {}", body.len(), self.redact(&url));
		Ok(serde_json::from_str(&body)?)
	}

	fn redact(&self, s: &str) -> String {
		if self.secret.is_empty() {
			s.to_string()
		} else {
			s.replace(&self.secret, "***")
		}
	}
}
