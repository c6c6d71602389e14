use clap::Parser;
use std::path::PathBuf;

/// Default input file name.
pub const DEFAULT_INPUT: &str = "math_operations.csv";
/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "math_operations_inverted.csv";

#[derive(Parser, Debug)]
#[command(
    name = "pixinv",
    version,
    about = "Invert pixel* columns of a CSV table (255 - value)"
)]
pub struct CliArgs {
    /// Input CSV file (single file mode)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output CSV file, created or overwritten (single file mode)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Input directory containing CSV files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Batch mode: continue with the remaining files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Also write the run report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}
