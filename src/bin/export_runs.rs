//! Export decoded glyph dumps as styled runs.
//!
//! Reads a JSON glyph dump produced by the decoding collaborator, segments
//! every page, and writes the result in the selected format.
//!
//! Usage:
//!   cargo run --release --bin export_runs -- dump.json
//!   cargo run --release --bin export_runs -- dump.json --format html --output out.html

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use pdf_runs::{
    write_output, CompactJsonConverter, DecodedDocument, ExtractedDocument, HtmlConverter,
    JsonConverter, OutputConverter, Result, SegmentationPipeline,
};

struct ExportConfig {
    input: PathBuf,
    output: PathBuf,
    format: OutputFormat,
    workers: usize,
}

#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Json,
    Compact,
    Html,
}

impl OutputFormat {
    fn default_output(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Compact => "output.json",
            OutputFormat::Html => "output.html",
        }
    }
}

impl ExportConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut format = OutputFormat::Json;
        let mut workers = 0usize;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--format" => {
                    i += 1;
                    format = match args.get(i).map(String::as_str) {
                        Some("json") => OutputFormat::Json,
                        Some("compact") => OutputFormat::Compact,
                        Some("html") => OutputFormat::Html,
                        other => {
                            eprintln!("unknown format: {}", other.unwrap_or(""));
                            usage();
                        },
                    };
                },
                "--output" | "-o" => {
                    i += 1;
                    match args.get(i) {
                        Some(path) => output = Some(PathBuf::from(path)),
                        None => usage(),
                    }
                },
                "--workers" => {
                    i += 1;
                    workers = args
                        .get(i)
                        .and_then(|w| w.parse().ok())
                        .unwrap_or_else(|| usage());
                },
                "--help" | "-h" => usage(),
                other => {
                    if input.is_some() {
                        eprintln!("unexpected argument: {}", other);
                        usage();
                    }
                    input = Some(PathBuf::from(other));
                },
            }
            i += 1;
        }

        let input = input.unwrap_or_else(|| usage());
        let output = output.unwrap_or_else(|| PathBuf::from(format.default_output()));
        Self {
            input,
            output,
            format,
            workers,
        }
    }
}

fn usage() -> ! {
    eprintln!(
        "Usage: export_runs <glyph-dump.json> [--format json|compact|html] \
         [--output PATH] [--workers N]"
    );
    process::exit(2);
}

fn run(config: &ExportConfig) -> Result<()> {
    let raw = std::fs::read_to_string(&config.input)?;
    let decoded: DecodedDocument = serde_json::from_str(&raw)?;

    let pipeline = SegmentationPipeline::with_config(
        pdf_runs::PipelineConfig::new().with_workers(config.workers),
    );
    let pages = pipeline.process(decoded.pages);
    let document = ExtractedDocument::assemble(decoded.name, decoded.metadata, pages);

    let converter: Box<dyn OutputConverter> = match config.format {
        OutputFormat::Json => Box::new(JsonConverter::new()),
        OutputFormat::Compact => Box::new(CompactJsonConverter::new()),
        OutputFormat::Html => Box::new(HtmlConverter::new()),
    };
    write_output(&config.output, converter.as_ref(), &document)
}

fn main() {
    env_logger::init();
    let config = ExportConfig::from_args();

    let start = Instant::now();
    match run(&config) {
        Ok(()) => {
            println!(
                "Wrote {} in {:.2}s",
                config.output.display(),
                start.elapsed().as_secs_f64()
            );
        },
        Err(err) => {
            eprintln!("export failed: {}", err);
            process::exit(1);
        },
    }
}
