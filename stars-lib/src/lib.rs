mod error;
mod export;
mod link_urls;
mod logging_middleware;
mod object_model;
pub mod output;
mod result;
mod stars_client;

pub use self::error::StarsError;
pub use self::export::{export, export_with, ExportConfig, ExportSummary};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{Repo, StarRecord};
pub use self::output::OutputFormat;
pub use self::result::StarsResult;
pub use self::stars_client::{StarsClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};

pub use reqwest::Url;
