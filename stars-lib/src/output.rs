//! Serialisation of fetched stars into the supported document formats.
//!
//! Each format lives in its own submodule exposing a `render` function over a
//! slice of [`StarRecord`]s; [`write`] picks one, renders the whole document
//! in memory and persists it with a single file write.

mod comma_separated;
mod markdown;
mod plain_text;

use crate::error::StarsError;
use crate::object_model::StarRecord;
use crate::result::StarsResult;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Csv,
    Text,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Markdown, Self::Csv, Self::Text];

    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }

    /// Human-facing name used by the interactive form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::Csv => "CSV",
            Self::Text => "TXT",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputFormat {
    type Err = StarsError;

    /// Accepts the extension codes (`md`, `csv`, `txt`) and the form labels,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "txt" | "text" => Ok(Self::Text),
            _ => Err(StarsError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Renders `stars` in `format` to `writer`, returning the number of records written.
pub fn render<W>(stars: &[StarRecord], format: OutputFormat, mut writer: W) -> io::Result<usize>
where
    W: Write,
{
    match format {
        OutputFormat::Markdown => markdown::render(stars, &mut writer)?,
        OutputFormat::Csv => comma_separated::render(stars, &mut writer)?,
        OutputFormat::Text => plain_text::render(stars, &mut writer)?,
    }
    writer.flush()?;
    Ok(stars.len())
}

/// Writes `stars` to the file at `path`, replacing any previous contents.
pub fn write<P>(stars: &[StarRecord], path: P, format: OutputFormat) -> StarsResult<usize>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let io_error = |source| StarsError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut buffer = Vec::new();
    let count = render(stars, format, &mut buffer).map_err(io_error)?;
    std::fs::write(path, buffer).map_err(io_error)?;
    Ok(count)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::object_model::{Repo, StarRecord};

    pub(crate) fn star(
        full_name: &str,
        description: Option<&str>,
        stargazers_count: u64,
        starred_at: &str,
    ) -> StarRecord {
        StarRecord {
            repo: Repo {
                full_name: full_name.to_string(),
                html_url: format!("https://x/{full_name}"),
                description: description.map(str::to_string),
                stargazers_count,
            },
            starred_at: starred_at.parse().expect("valid timestamp"),
        }
    }

    /// The two-record scenario: one without a description, one with.
    pub(crate) fn pair() -> Vec<StarRecord> {
        vec![
            star("a/b", None, 5, "2022-01-01T00:00:00Z"),
            star("c/d", Some("desc"), 10, "2022-02-02T00:00:00Z"),
        ]
    }
}
