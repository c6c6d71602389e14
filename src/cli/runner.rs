use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use pixinv::{InvertParams, invert_file, process_directory_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!("Report written to {:?}", path);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        // stderr keeps stdout to the single confirmation line
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let params = InvertParams::default();
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(&input_dir, &output_dir, &params, args.batch)
            .map_err(AppError::from)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);

        if let Some(path) = &args.report {
            write_report(path, &report)?;
        }
        println!(
            "Batch complete: processed={} skipped={} errors={}",
            report.processed, report.skipped, report.errors
        );
    } else {
        let report = invert_file(&args.input, &args.output, &params).map_err(AppError::from)?;
        info!(
            "Successfully processed: {:?} -> {:?} (columns inverted: {})",
            args.input,
            args.output,
            report.inverted_columns.len()
        );

        if let Some(path) = &args.report {
            write_report(path, &report)?;
        }
        println!(
            "Inversion complete. File saved as '{}'",
            args.output.display()
        );
    }

    Ok(())
}
