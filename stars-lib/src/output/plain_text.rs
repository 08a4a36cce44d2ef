use crate::object_model::StarRecord;
use std::io::{self, Write};

pub(super) fn render<W>(stars: &[StarRecord], writer: &mut W) -> io::Result<()>
where
    W: Write,
{
    for star in stars {
        writeln!(
            writer,
            "{} - {} ⭐ - {}",
            star.full_name(),
            star.star_count(),
            star.html_url()
        )?;
    }
    Ok(())
}
