use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use imgconv::{ConvertConfig, ConvertError, Limits, convert, logger};
use tracing::debug;

/// Convert an image between BMP, JPEG and PPM, choosing formats by file extension.
#[derive(Parser, Debug)]
#[command(name = "imgconv", version, about)]
struct Cli {
    /// Image to read (.bmp, .jpg, .jpeg, .ppm)
    in_file: PathBuf,

    /// Image to write (.bmp, .jpg, .jpeg, .ppm)
    out_file: PathBuf,

    /// JPEG output quality
    #[arg(long, default_value_t = imgconv::jpeg::DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: u8,

    /// Write significant_colors = 0x1000000 in BMP output, as older releases did
    #[arg(long)]
    legacy_bmp_colors: bool,

    /// Refuse to decode images with more pixels than this
    #[arg(long)]
    max_pixels: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not errors
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logger::init(cli.verbose);

    let config = ConvertConfig::builder()
        .jpeg_quality(cli.jpeg_quality)
        .legacy_bmp_colors(cli.legacy_bmp_colors)
        .limits(Limits {
            max_pixels: cli.max_pixels,
            ..Default::default()
        })
        .build();

    match convert(&cli.in_file, &cli.out_file, &config) {
        Ok(_) => {
            println!("Successfully converted");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{err}");
            eprintln!("{}", user_message(&err));
            ExitCode::from(err.exit_code())
        }
    }
}

fn user_message(err: &ConvertError) -> &'static str {
    match err {
        ConvertError::UnknownInputFormat(_) => "Unknown format of the input file",
        ConvertError::UnknownOutputFormat(_) => "Unknown format of the output file",
        ConvertError::Load { .. } => "Loading failed",
        ConvertError::Save { .. } => "Saving failed",
        _ => "Conversion failed",
    }
}
