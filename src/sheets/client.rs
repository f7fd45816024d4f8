// ABOUTME: Low-level GET client for the spreadsheet-backed endpoint
// ABOUTME: Builds sheet-selector URLs, attaches optional bearer auth, decodes envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use crate::constants::{env_config, params};
use crate::errors::{ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the sheets endpoint.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Base URL of the spreadsheet-backed API
    pub base_url: String,
    /// Total request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            base_url: env_config::sheets_base_url(),
            timeout: Duration::from_secs(env_config::request_timeout_secs()),
            connect_timeout: Duration::from_secs(env_config::connect_timeout_secs()),
        }
    }
}

/// Global sheets configuration singleton
static SHEETS_CONFIG: OnceLock<SheetsConfig> = OnceLock::new();

impl SheetsConfig {
    /// Get the global sheets configuration.
    #[must_use]
    pub fn global() -> &'static Self {
        SHEETS_CONFIG.get_or_init(Self::default)
    }
}

/// GET client for the spreadsheet-backed endpoint.
///
/// Every collection lives behind the same base URL; the `sheet` query
/// parameter selects one, and caller-supplied pairs filter within it. No
/// retries, no caching, no status-code interpretation beyond success.
pub struct SheetsClient {
    config: SheetsConfig,
    client: Client,
    bearer_token: Option<String>,
}

impl Default for SheetsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetsClient {
    /// Create a client against the globally configured endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SheetsConfig::global().clone())
    }

    /// Create a client with an explicit configuration.
    #[must_use]
    pub fn with_config(config: SheetsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            config,
            client,
            bearer_token: None,
        }
    }

    /// Attach a bearer token to every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Build the request URL for one sheet.
    ///
    /// A trailing `/` on the sheet name is trimmed, and parameters with
    /// empty values are dropped rather than sent as blank filters.
    fn request_url(&self, sheet: &str, query: &[(&str, String)]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.config.base_url)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(params::SHEET, sheet.trim_end_matches('/'));
            for (key, value) in query {
                if value.is_empty() {
                    continue;
                }
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Fetch one sheet and decode its envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL cannot be parsed
    /// - The request fails at the network level
    /// - The endpoint answers with a non-success status (body preserved)
    /// - The body does not decode as the expected envelope
    pub async fn get<T: DeserializeOwned>(
        &self,
        sheet: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = self.request_url(sheet, query)?;
        debug!(sheet, url = %url, "fetching sheet");

        let mut request = self.client.get(url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(sheet, status = status.as_u16(), "sheet request failed");
            return Err(ClientError::Api {
                sheet: sheet.to_owned(),
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            sheet: sheet.to_owned(),
            source,
        })
    }
}
