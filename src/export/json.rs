use super::ExportRecord;
use crate::errors::ExtractResult;
use std::io::Write;
use std::path::Path;

pub(super) fn write(path: &Path, records: &[ExportRecord]) -> ExtractResult<()> {
    let file = std::fs::File::create(path)?;
    write_to(file, records)
}

fn write_to<W: Write>(mut writer: W, records: &[ExportRecord]) -> ExtractResult<()> {
    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
