use clap::Parser;
use std::path::PathBuf;
use tagger::app::{App, AppMode};
use tagger::config::load_config;
use tagger::form::OutputFormat;
use tagger::input::{self, LoadedPool};
use tagger::logging;
use tagger::ui::TuiManager;
use tracing::{info, warn};

/// Compose a sentence from a pool of words and submit it as one answer.
#[derive(Parser, Debug)]
#[command(name = "tagger", version)]
struct Cli {
    /// Word list file, one word or phrase per line
    words_file: Option<String>,

    /// Inline words, whitespace separated
    #[arg(long, conflicts_with = "words_file")]
    words: Option<String>,

    /// Config file (defaults to ./tagger.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the submitted answer here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Name of the answer field
    #[arg(long)]
    field: Option<String>,

    /// Keyboard only
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.form.format = format;
    }
    if let Some(field) = cli.field {
        config.form.field = field;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Logging disabled: {}", e);
    }

    let pool: Option<LoadedPool> = match (&cli.words_file, &cli.words) {
        (Some(path), _) => Some(input::file::load(path)?),
        (None, Some(text)) => Some(input::from_text(text)?),
        (None, None) => None,
    };

    let form = config.form.answer_form();
    let mut app = match pool {
        Some(pool) => App::with_pool(form, pool),
        None => App::new(form),
    };

    // The TUI owns the terminal until it is dropped at the end of this block
    let mode = {
        let mut tui = TuiManager::new(config.ui.clone())?;
        tui.run_event_loop(&mut app)?
    };

    match (mode, app.take_submission()) {
        (AppMode::Submitted, Some(submission)) => {
            submission.write_to(config.form.format, cli.output.as_deref())?;
            info!(format = ?config.form.format, "answer written");
        }
        _ => warn!("session ended without an answer"),
    }

    Ok(())
}
