use crate::error::StarsError;
use crate::output::{self, OutputFormat};
use crate::result::StarsResult;
use crate::stars_client::{StarsClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use anyhow::anyhow;
use log::info;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything one export run needs.
#[derive(Debug)]
pub struct ExportConfig {
    pub username: String,
    pub token: Option<SecretString>,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub api_url: Url,
    pub timeout: Duration,
}

impl ExportConfig {
    /// Config for `username` with the default API endpoint and timeout.
    pub fn new<P>(username: &str, output: P, format: OutputFormat) -> StarsResult<Self>
    where
        P: Into<PathBuf>,
    {
        Ok(Self {
            username: username.to_string(),
            token: None,
            output: output.into(),
            format,
            api_url: DEFAULT_API_URL
                .parse::<Url>()
                .map_err(|e| StarsError::Other(anyhow!(e)))?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn client(&self) -> StarsResult<StarsClient> {
        let token = self
            .token
            .as_ref()
            .map(|t| SecretString::from(t.expose_secret().to_string()));
        StarsClient::new(self.api_url.clone(), token, self.timeout)
    }
}

/// Outcome of a successful export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    pub count: usize,
    pub path: PathBuf,
}

/// Fetches the stars described by `config` and writes them to `config.output`.
pub async fn export(config: &ExportConfig) -> StarsResult<ExportSummary> {
    let client = config.client()?;
    export_with(&client, &config.username, &config.output, config.format).await
}

/// Same as [`export`] with a caller-supplied client.
///
/// The output file is only touched once every page has been fetched.
pub async fn export_with(
    client: &StarsClient,
    username: &str,
    path: &Path,
    format: OutputFormat,
) -> StarsResult<ExportSummary> {
    let stars = client.list_starred(username).await?;
    let count = output::write(&stars, path, format)?;
    info!("wrote {} records to {}", count, path.display());
    Ok(ExportSummary {
        count,
        path: path.to_path_buf(),
    })
}
