use crate::object_model::StarRecord;
use csv::{Terminator, WriterBuilder};
use std::io::{self, Write};

const HEADER: [&str; 4] = ["Repository", "Description", "Stars", "Starred On"];

pub(super) fn render<W>(stars: &[StarRecord], writer: &mut W) -> io::Result<()>
where
    W: Write,
{
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for star in stars {
        let star_count = star.star_count().to_string();
        let starred_on = star.starred_on().to_string();
        csv_writer.write_record([
            star.full_name(),
            star.description(),
            star_count.as_str(),
            starred_on.as_str(),
        ])?;
    }
    csv_writer.flush()
}
