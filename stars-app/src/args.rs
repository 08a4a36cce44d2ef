use clap::{Parser, ValueEnum};
use stars_lib::{OutputFormat, Url, DEFAULT_API_URL};

#[derive(Debug, Parser)]
#[clap(about = "Export a GitHub user's starred repositories")]
pub struct Args {
    #[clap(short = 'u', long = "username", help = "GitHub username to fetch stars for")]
    pub username: String,

    #[clap(
        short = 't',
        long = "token",
        help = "GitHub personal access token (optional)",
        env = "STARS_EXPORT_GITHUB_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    #[clap(
        short = 'o',
        long = "output",
        help = "Output file name (without extension)",
        default_value = "github_stars"
    )]
    pub output: String,

    #[clap(
        short = 'f',
        long = "format",
        help = "Output format",
        value_enum,
        default_value_t = FormatArg::Md
    )]
    pub format: FormatArg,

    #[clap(long = "api-url", help = "GitHub REST API base URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    #[clap(
        long = "timeout-secs",
        help = "Per-request timeout in seconds",
        default_value = "30",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Markdown table
    Md,
    /// Comma-separated values
    Csv,
    /// One line per repository
    Txt,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Md => OutputFormat::Markdown,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Txt => OutputFormat::Text,
        }
    }
}

impl Args {
    /// Output path: the base name with the format's extension always appended.
    pub fn output_path(&self) -> String {
        format!(
            "{}.{}",
            self.output,
            OutputFormat::from(self.format).extension()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use stars_lib::OutputFormat;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["stars-export", "--username", "octo"]).unwrap();
        assert_eq!(args.username, "octo");
        assert_eq!(args.output_path(), "github_stars.md");
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Markdown);
        assert_eq!(args.timeout_secs, 30);
    }

    #[test]
    fn extension_is_always_appended() {
        let args = Args::try_parse_from([
            "stars-export",
            "-u",
            "octo",
            "-o",
            "out/stars.csv",
            "-f",
            "csv",
        ])
        .unwrap();
        assert_eq!(args.output_path(), "out/stars.csv.csv");
    }

    #[test]
    fn username_is_required() {
        assert!(Args::try_parse_from(["stars-export"]).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Args::try_parse_from(["stars-export", "-u", "octo", "--timeout-secs", "0"]).is_err());
        let args =
            Args::try_parse_from(["stars-export", "-u", "octo", "--timeout-secs", "1"]).unwrap();
        assert_eq!(args.timeout_secs, 1);
    }

    #[test]
    fn api_url_is_parsed_up_front() {
        let args = Args::try_parse_from(["stars-export", "-u", "octo"]).unwrap();
        assert_eq!(args.api_url.as_str(), "https://api.github.com/");
        assert!(
            Args::try_parse_from(["stars-export", "-u", "octo", "--api-url", "not a url"]).is_err()
        );
    }

    #[test]
    fn unknown_format_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["stars-export", "-u", "octo", "-f", "html"]).is_err());
    }
}
