//! `pinyin-annotate` CLI - add pinyin above Chinese characters in a text file

mod cmd;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pinyin_annotate::Settings;

#[derive(Parser)]
#[command(name = "pinyin-annotate")]
#[command(about = "Add pinyin above Chinese characters in a text file")]
#[command(
    long_about = "Add pinyin above Chinese characters in a text file.\n\n\
    Each line containing Chinese characters gets a line of tone-marked pinyin \
    above it, aligned column by column. Run without arguments to be prompted \
    for the paths."
)]
#[command(version)]
struct Cli {
    /// Input Chinese text file (prompted for when omitted)
    input: Option<PathBuf>,

    /// Output file (default: input name with `_pinyin` before the extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (default: ~/.config/pinyin-annotate/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Don't print the converted text after writing it
    #[arg(long)]
    no_preview: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;

    let (input, output) = match cli.input {
        Some(input) => (input, cli.output),
        None => {
            let answers = cmd::prompt::ask_paths(&mut io::stdin().lock(), &mut io::stdout())?;
            (answers.input, answers.output.or(cli.output))
        }
    };

    let preview = settings.preview && !cli.no_preview;
    cmd::cmd_convert(
        &mut io::stdout().lock(),
        &input,
        output.as_deref(),
        &settings,
        preview,
    )
}

/// Logs go to stderr so stdout carries only the report and preview.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
