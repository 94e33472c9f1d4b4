//! CLI entry point: renders the full icon set into an `.appiconset`
//! directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vcam_icon::IconSetBuilder;

#[derive(Debug, Parser)]
#[command(name = "vcam-icon", about = "Generate the RTMP virtual camera app icon set")]
struct Args {
    /// Icon-set directory to write into (created if absent).
    #[arg(short, long, default_value = "AppIcon.appiconset")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    match IconSetBuilder::new(&args.output).generate() {
        Ok(manifest) => {
            println!(
                "wrote {} icons + manifest to {}",
                manifest.images.len(),
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
