use super::ExportRecord;
use crate::errors::ExtractResult;
use std::io::Write;
use std::path::Path;

pub(super) fn write(path: &Path, records: &[ExportRecord]) -> ExtractResult<()> {
    let file = std::fs::File::create(path)?;
    write_to(file, records)
}

fn write_to<W: Write>(writer: W, records: &[ExportRecord]) -> ExtractResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
