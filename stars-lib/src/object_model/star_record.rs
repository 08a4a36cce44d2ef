use super::repo::Repo;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// One item of the `application/vnd.github.star+json` representation of
/// `GET /users/{username}/starred`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StarRecord {
    #[serde(rename = "repo")]
    pub repo: Repo,

    #[serde(rename = "starred_at")]
    pub starred_at: DateTime<Utc>,
}

impl StarRecord {
    pub fn full_name(&self) -> &str {
        &self.repo.full_name
    }

    pub fn html_url(&self) -> &str {
        &self.repo.html_url
    }

    /// Repository description, empty when the API reports none.
    pub fn description(&self) -> &str {
        self.repo.description.as_deref().unwrap_or_default()
    }

    pub fn star_count(&self) -> u64 {
        self.repo.stargazers_count
    }

    /// Calendar date (UTC) the repository was starred; time of day is dropped.
    pub fn starred_on(&self) -> NaiveDate {
        self.starred_at.date_naive()
    }
}
