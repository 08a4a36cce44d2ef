#![allow(dead_code)]

//! Canned API responses served from inside the middleware stack.

use http::Extensions;
use reqwest::header::HeaderMap;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{ClientBuilder, Middleware, Next};
use secrecy::SecretString;
use serde_json::{json, Value};
use stars_lib::{LoggingMiddleware, StarsClient};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const API_URL: &str = "https://api.test/";

#[derive(Clone)]
pub struct Page {
    pub status: StatusCode,
    pub body: String,
    pub link: Option<String>,
}

impl Page {
    pub fn ok(items: Vec<Value>, link: Option<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: Value::Array(items).to_string(),
            link,
        }
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            link: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub url: String,
    pub headers: HeaderMap,
}

/// Serves pages keyed by the exact request URL and records every request.
#[derive(Clone, Default)]
pub struct CannedApi {
    pages: Arc<Mutex<HashMap<String, Page>>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl CannedApi {
    pub fn page(self, url: &str, page: Page) -> Self {
        self.pages.lock().unwrap().insert(url.to_string(), page);
        self
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn client(&self, token: Option<&str>) -> StarsClient {
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(LoggingMiddleware::default())
            .with(self.clone())
            .build();
        StarsClient::with_client(
            API_URL,
            token.map(|t| SecretString::from(t.to_string())),
            client,
        )
        .unwrap()
    }
}

#[async_trait::async_trait]
impl Middleware for CannedApi {
    async fn handle(
        &self,
        request: Request,
        _extensions: &mut Extensions,
        _next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let url = request.url().to_string();
        self.seen.lock().unwrap().push(SeenRequest {
            url: url.clone(),
            headers: request.headers().clone(),
        });

        let page = self.pages.lock().unwrap().get(&url).cloned();
        let Some(page) = page else {
            return Err(reqwest_middleware::Error::Middleware(anyhow::anyhow!(
                "no canned page for {url}"
            )));
        };

        let mut builder = http::Response::builder().status(page.status);
        if let Some(link) = page.link {
            builder = builder.header("link", link);
        }
        Ok(Response::from(builder.body(page.body).unwrap()))
    }
}

pub fn starred_url(username: &str, page: Option<usize>) -> String {
    match page {
        None => format!("{API_URL}users/{username}/starred?per_page=100"),
        Some(n) => format!("{API_URL}users/{username}/starred?per_page=100&page={n}"),
    }
}

pub fn link(next: Option<usize>, last: usize) -> Option<String> {
    let last_link = format!("<{}>; rel=\"last\"", starred_url("octo", Some(last)));
    Some(match next {
        Some(n) => format!("<{}>; rel=\"next\", {last_link}", starred_url("octo", Some(n))),
        None => last_link,
    })
}

pub fn item(full_name: &str, description: Option<&str>, stars: u64, starred_at: &str) -> Value {
    json!({
        "starred_at": starred_at,
        "repo": {
            "id": 1,
            "full_name": full_name,
            "html_url": format!("https://github.com/{full_name}"),
            "description": description,
            "stargazers_count": stars,
        }
    })
}

pub fn items(page: usize, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            item(
                &format!("owner/repo-{page}-{i}"),
                Some("a repo"),
                i as u64,
                "2024-03-09T08:07:06Z",
            )
        })
        .collect()
}
