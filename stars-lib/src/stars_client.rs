use crate::error::StarsError;
use crate::link_urls::LinkUrls;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::StarRecord;
use crate::result::StarsResult;
use anyhow::anyhow;
use log::{debug, info};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const PER_PAGE: usize = 100;

// The plain media type omits `starred_at`.
const STAR_MEDIA_TYPE: &str = "application/vnd.github.star+json";
const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct StarsClient {
    url: Url,
    token: Option<SecretString>,
    client: ClientWithMiddleware,
}

impl StarsClient {
    /// Creates a client with a bounded per-request timeout and request logging.
    pub fn new<U>(url: U, token: Option<SecretString>, timeout: Duration) -> StarsResult<Self>
    where
        U: IntoUrl,
    {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StarsError::Other(anyhow!(e)))?;
        Self::with_client(
            url,
            token,
            ClientBuilder::new(client)
                .with(LoggingMiddleware::default())
                .build(),
        )
    }

    /// Creates a client on top of a caller-assembled middleware stack.
    pub fn with_client<U>(
        url: U,
        token: Option<SecretString>,
        client: ClientWithMiddleware,
    ) -> StarsResult<Self>
    where
        U: IntoUrl,
    {
        Ok(Self {
            url: url.into_url().map_err(|e| StarsError::Other(anyhow!(e)))?,
            token: token.filter(|t| !t.expose_secret().trim().is_empty()),
            client,
        })
    }

    #[cfg(test)]
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Fetches every repository starred by `username`, in the order the API
    /// returns them (most recently starred first).
    pub async fn list_starred(&self, username: &str) -> StarsResult<Vec<StarRecord>> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StarsError::EmptyUsername);
        }

        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| StarsError::Other(anyhow!("{} cannot be used as a base URL", self.url)))?
            .pop_if_empty()
            .extend(["users", username, "starred"]);
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string());

        let stars = self.get_paged::<StarRecord>(url).await?;
        info!("{} has {} starred repositories", username, stars.len());
        Ok(stars)
    }

    async fn get_paged<T>(&self, url: Url) -> StarsResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut next_url = Some(url);
        let mut page_number = 0usize;

        while let Some(url) = next_url {
            page_number += 1;
            let (items, link_urls) = self.get_items::<T>(&url).await?;
            match link_urls.last_page() {
                Some(last_page_number) => info!(
                    "page {}/{}: {} items",
                    page_number,
                    last_page_number,
                    items.len()
                ),
                None => debug!("page {}: {} items", page_number, items.len()),
            }
            all_items.extend(items);
            next_url = link_urls.next_url;
        }

        Ok(all_items)
    }

    async fn get_items<T>(&self, url: &Url) -> StarsResult<(Vec<T>, LinkUrls)>
    where
        T: DeserializeOwned,
    {
        let mut request_builder = self
            .client
            .get(url.clone())
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, STAR_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            request_builder = request_builder.bearer_auth(token.expose_secret());
        }

        let response = request_builder
            .send()
            .await
            .map_err(|e| StarsError::Other(anyhow!(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StarsError::Http {
                status,
                url: url.clone(),
                body,
            });
        }

        let link_urls = LinkUrls::from_response(&response)?;

        Ok((
            response
                .json::<Vec<T>>()
                .await
                .map_err(|e| StarsError::Other(anyhow!(e).context(format!("decoding {url}"))))?,
            link_urls,
        ))
    }
}
