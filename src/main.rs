use clap::Parser;
use statement_export_rs::{ExportFormat, Extraction, PdfSource};
use std::path::PathBuf;

/// Convert Chase UK statements to machine readable formats.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Statement PDF files to extract, processed in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Export file format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Xlsx)]
    format: ExportFormat,
}

fn run(cli: Cli) -> statement_export_rs::errors::ExtractResult<()> {
    let mut extraction = Extraction::new();
    for path in &cli.files {
        let source = PdfSource::open(path);
        extraction.ingest(&source)?;
    }

    cli.format.export(extraction.transactions())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
