use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use richtext_md::Config;

#[derive(Parser)]
#[command(name = "richtext-md")]
#[command(version, about = "Convert Slack rich text JSON to Markdown")]
struct Cli {
    /// Input JSON file holding a rich_text block (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output Markdown file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file (defaults to the built-in config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, stdin: impl Read, mut stdout: impl Write) -> richtext_md::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::compiled_default(),
    };

    let json = read_input(cli.input.as_deref(), stdin)?;
    let markdown = richtext_md::convert_json_with_config(&json, &config)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{markdown}\n"))?;
            debug!(path = %path.display(), "wrote markdown");
        }
        None => writeln!(stdout, "{markdown}")?,
    }

    Ok(())
}

fn read_input(input: Option<&Path>, mut stdin: impl Read) -> io::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut json = String::new();
            stdin.read_to_string(&mut json)?;
            Ok(json)
        }
    }
}
