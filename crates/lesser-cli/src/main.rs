use clap::{ArgAction, CommandFactory, Parser};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod logger;

#[derive(Parser)]
#[command(name = "lesser")]
#[command(about = "Compile .lesser stylesheets to flat CSS")]
#[command(version)]
struct Cli {
    /// Input stylesheet
    input: Option<PathBuf>,

    /// Output CSS file
    #[arg(default_value = "main.css")]
    output: PathBuf,

    /// Check the input for errors without writing output
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let Some(input) = cli.input.as_deref() else {
        eprintln!("Please provide a file to read.");
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    };

    let css = match compile_file(input) {
        Ok(css) => css,
        Err(code) => return code,
    };

    if cli.check {
        eprintln!("OK: {}", input.display());
        return ExitCode::SUCCESS;
    }

    if let Err(e) = std::fs::write(&cli.output, &css) {
        eprintln!("Error writing {}: {e}", cli.output.display());
        return ExitCode::FAILURE;
    }

    eprintln!("Output to {}", cli.output.display());
    ExitCode::SUCCESS
}

/// Read the input line by line and compile it.
fn compile_file(path: &Path) -> Result<String, ExitCode> {
    let lines = read_lines(path).map_err(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        ExitCode::FAILURE
    })?;
    log::debug!("read {} lines from {}", lines.len(), path.display());

    lesser_codegen::compile_lines(&lines).map_err(|e| {
        eprintln!("error[{}]: {e}", e.kind());
        ExitCode::FAILURE
    })
}

fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}
