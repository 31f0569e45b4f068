// src/fetch/mod.rs
use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, error, instrument};
use url::Url;

use crate::process::{parse_table, Table};

/// Where the data files live.
#[derive(Debug, Clone)]
pub enum Source {
    /// Files served under an HTTP(S) base URL.
    Http { client: Client, base: Url },
    /// Files read from a local directory.
    Dir(PathBuf),
}

impl Source {
    /// `http://` and `https://` locations are fetched over HTTP, anything else
    /// is treated as a directory.
    pub fn parse(location: &str, client: &Client) -> Result<Self> {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::http(client.clone(), location)
        } else {
            Ok(Self::Dir(PathBuf::from(location)))
        }
    }

    pub fn http(client: Client, base: &str) -> Result<Self> {
        // without the trailing slash `join` would replace the last segment
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = Url::parse(&base).with_context(|| format!("parsing base URL {}", base))?;
        Ok(Self::Http { client, base })
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self::Dir(path.into())
    }

    /// Human-readable location of `path`, for logs.
    pub fn locate(&self, path: &str) -> String {
        match self {
            Source::Http { base, .. } => base
                .join(path)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| format!("{}{}", base, path)),
            Source::Dir(dir) => dir.join(path).display().to_string(),
        }
    }

    /// Fetch the text of `path`. A non-success HTTP status is an error.
    pub async fn fetch_text(&self, path: &str) -> Result<String> {
        match self {
            Source::Http { client, base } => {
                let url = base
                    .join(path)
                    .with_context(|| format!("resolving {} against {}", path, base))?;
                debug!("Fetching text from {}", url);
                client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("GET {} failed", url))?
                    .error_for_status()
                    .with_context(|| format!("Non-success status {}", url))?
                    .text()
                    .await
                    .with_context(|| format!("Reading text from {}", url))
            }
            Source::Dir(dir) => {
                let file = dir.join(path);
                debug!("Reading text from {}", file.display());
                fs::read_to_string(&file)
                    .await
                    .with_context(|| format!("reading {}", file.display()))
            }
        }
    }
}

/// Fetch `path` and parse it as CSV.
///
/// Never fails: any fetch error is logged and yields an empty [`Table`], so
/// callers cannot tell a missing file from an empty one.
#[instrument(level = "debug", skip(source), fields(location = %source.locate(path)))]
pub async fn load_table(source: &Source, path: &str) -> Table {
    match source.fetch_text(path).await {
        Ok(text) => {
            let table = parse_table(&text);
            debug!(rows = table.len(), "parsed table");
            table
        }
        Err(e) => {
            error!("failed to load {}: {:#}", path, e);
            Table::default()
        }
    }
}
