//! Interactive form front-end for exporting starred repositories.
//!
//! Asks for a username, an optional (masked) token, an output format and a
//! save location, then runs the export. Unlike `stars-export`, a failed run
//! is reported as a message and the form is shown again; leaving the username
//! blank (or closing input) quits.

use anyhow::Result;
use colored::Colorize;
use secrecy::SecretString;
use stars_lib::{export, ExportConfig, ExportSummary, OutputFormat, StarsError};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

const DEFAULT_FILE_STEM: &str = "github_stars";

#[derive(Debug)]
struct FormInput {
    username: String,
    token: Option<SecretString>,
    format: OutputFormat,
    path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let masked = io::stdin().is_terminal();
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    writeln!(output, "{}", "GitHub Starred Repos Exporter".bold())?;
    loop {
        let form = read_form(&mut input, &mut output, |input, output, label| {
            if masked {
                rpassword::prompt_password(label)
            } else {
                prompt_plain(input, output, label).map(Option::unwrap_or_default)
            }
        })?;
        let Some(form) = form else {
            break;
        };

        match run(form).await {
            Ok(summary) => writeln!(
                output,
                "{} Saved {} starred repositories to {}",
                "Success:".green().bold(),
                summary.count,
                summary.path.display()
            )?,
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    Ok(())
}

async fn run(form: FormInput) -> Result<ExportSummary, StarsError> {
    let config = ExportConfig {
        token: form.token,
        ..ExportConfig::new(&form.username, form.path, form.format)?
    };
    export(&config).await
}

fn read_form<R, W, F>(
    input: &mut R,
    output: &mut W,
    mut read_secret: F,
) -> io::Result<Option<FormInput>>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut R, &mut W, &str) -> io::Result<String>,
{
    writeln!(output)?;
    let Some(username) = prompt_plain(input, output, "GitHub Username: ")? else {
        return Ok(None);
    };
    if username.is_empty() {
        return Ok(None);
    }

    let token = read_secret(input, output, "GitHub Token (optional): ")?;
    let token = Some(token.trim().to_string())
        .filter(|t| !t.is_empty())
        .map(SecretString::from);

    let format = loop {
        let choices = OutputFormat::ALL
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join("/");
        let prompt = format!("Output Format [{choices}] (Markdown): ");
        let Some(choice) = prompt_plain(input, output, &prompt)? else {
            return Ok(None);
        };
        match parse_format_choice(&choice) {
            Ok(format) => break format,
            Err(e) => writeln!(output, "{e}")?,
        }
    };

    let prompt = format!(
        "Save as (*.{}) [{}]: ",
        format.extension(),
        resolve_save_path("", format).display()
    );
    let Some(path) = prompt_plain(input, output, &prompt)? else {
        return Ok(None);
    };

    Ok(Some(FormInput {
        username,
        token,
        format,
        path: resolve_save_path(&path, format),
    }))
}

/// Prints `label` and reads one trimmed line; `None` once input is exhausted.
fn prompt_plain<R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Blank selects Markdown; otherwise a label, an extension code or a menu
/// position (1-based).
fn parse_format_choice(choice: &str) -> Result<OutputFormat, StarsError> {
    let choice = choice.trim();
    if choice.is_empty() {
        return Ok(OutputFormat::default());
    }
    if let Ok(n) = choice.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| OutputFormat::ALL.get(i).copied())
            .ok_or_else(|| StarsError::UnsupportedFormat(choice.to_string()));
    }
    choice.parse()
}

/// Blank picks the default file name; a path without an extension gets the
/// format's extension.
fn resolve_save_path(path: &str, format: OutputFormat) -> PathBuf {
    let path = path.trim();
    let mut path = if path.is_empty() {
        PathBuf::from(DEFAULT_FILE_STEM)
    } else {
        PathBuf::from(path)
    };
    if path.extension().is_none() {
        path.set_extension(format.extension());
    }
    path
}
