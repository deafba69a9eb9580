use super::{ExportRecord, COLUMNS};
use crate::errors::ExtractResult;
use num_traits::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

pub(super) fn write(path: &Path, records: &[ExportRecord]) -> ExtractResult<()> {
    let mut workbook = build_workbook(records)?;
    workbook.save(path)?;
    Ok(())
}

fn build_workbook(records: &[ExportRecord]) -> ExtractResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_rows(worksheet, records)?;
    Ok(workbook)
}

fn write_rows(worksheet: &mut Worksheet, records: &[ExportRecord]) -> ExtractResult<()> {
    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, record.date.to_string())?;
        worksheet.write_string(row, 1, &record.details)?;
        if let Some(amount) = record.amount {
            worksheet.write_number(row, 2, amount.to_f64().unwrap_or_default())?;
        }
        worksheet.write_number(row, 3, record.balance.to_f64().unwrap_or_default())?;
    }

    Ok(())
}
