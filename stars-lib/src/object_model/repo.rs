use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Repo {
    #[serde(rename = "full_name")]
    pub full_name: String,

    #[serde(rename = "html_url")]
    pub html_url: String,

    #[serde(rename = "description", default)]
    pub description: Option<String>,

    #[serde(rename = "stargazers_count")]
    pub stargazers_count: u64,
}
