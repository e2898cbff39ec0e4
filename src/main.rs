use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use yaml_split::{cli::Cli, input, output, record};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // With both arguments the first names the input file; with only one,
    // input comes from stdin and the argument names the output directory.
    let (raw, out_dir) = match cli.out_dir {
        Some(dir) => (input::read_file(&cli.input)?, PathBuf::from(dir)),
        None => (input::read_stdin()?, PathBuf::from(&cli.input)),
    };

    let records = record::split_documents(&raw)?;

    output::ensure_out_dir(&out_dir)?;
    output::write_records(&out_dir, &records)?;

    Ok(())
}
