use crate::object_model::StarRecord;
use std::io::{self, Write};

const HEADER: &str = "| Repository | Description | ⭐ Stars | ⭐ Starred On |";
const SEPARATOR: &str = "|------------|-------------|--------:|-------------|";

pub(super) fn render<W>(stars: &[StarRecord], writer: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(writer, "{HEADER}")?;
    writeln!(writer, "{SEPARATOR}")?;
    for star in stars {
        // Keep each record on a single table row.
        let description = star.description().replace("\r\n", " ").replace(['\r', '\n'], " ");
        writeln!(
            writer,
            "| [{}]({}) | {} | {} | {} |",
            star.full_name(),
            star.html_url(),
            description,
            star.star_count(),
            star.starred_on()
        )?;
    }
    Ok(())
}
