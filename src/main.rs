mod error;
mod renderer;
mod scanner;
mod types;

use clap::Parser;
use colored::Colorize;
use error::TreeError;
use log::{debug, info};
use std::fs;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Root directory to scan for Markdown files
    #[arg(long, short = 'r', default_value = "content")]
    root: String,

    /// Output file for the generated directory tree
    #[arg(long, short = 'o', default_value = "DIRECTORY_TREE.md")]
    output: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args.root, &args.output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Walks the root, renders the grouped index and writes it out. Nothing is
/// written when the root check fails.
fn run(root_dir: &str, output_file: &str) -> Result<(), TreeError> {
    if !Path::new(root_dir).exists() {
        return Err(TreeError::RootNotFound(root_dir.to_string()));
    }

    let entries = scanner::collect_entries(root_dir)?;
    debug!("collected {} markdown files under {root_dir}", entries.len());

    let document = renderer::render(&entries);
    fs::write(output_file, document)?;
    info!("directory tree written to {output_file}");

    println!(
        "{}",
        format!("Directory tree generated at {output_file}").green()
    );
    Ok(())
}
