use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "deckmix")]
#[command(about = "deckmix - mix flashcards across decks and revisit past draws", long_about = None)]
struct Cli {
    /// Study document to use instead of the default library.json
    #[arg(long, global = true)]
    document: Option<PathBuf>,

    /// Configuration file to use instead of the default config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a random set of cards from one or more decks
    Mix {
        /// Deck identifier (repeat for several decks)
        #[arg(short, long = "deck")]
        decks: Vec<String>,
        /// Number of cards to draw
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: i64,
        /// Do not add this mix to the history
        #[arg(long)]
        no_record: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Repeat the deck selection and count of a recorded mix
    Replay {
        session_id: String,
        #[arg(long)]
        no_record: bool,
        #[arg(long)]
        json: bool,
    },
    /// Inspect or edit the mixing history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Show the grid used to lay out a number of cards
    Layout { count: usize },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List recent mixing sessions
    List {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete one mixing session
    Delete { session_id: String },
    /// Remove sessions past the retention period
    Cleanup,
}

/// Whether the automatic cleanup of expired history runs before `command`.
///
/// An explicit `history cleanup` does the cleanup itself so it can report
/// how many sessions were removed.
fn runs_startup_cleanup(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::History {
            action: HistoryAction::Cleanup
        }
    )
}

fn main() -> Result<()> {
    let Cli {
        document,
        config,
        command,
    } = Cli::parse();

    // Layout is pure arithmetic and needs neither config nor storage
    if let Commands::Layout { count } = command {
        commands::layout::show(count);
        return Ok(());
    }

    let startup_cleanup = runs_startup_cleanup(&command);
    let context = commands::Context::load(config, document, startup_cleanup)?;

    match command {
        Commands::Mix {
            decks,
            count,
            no_record,
            json,
        } => commands::mix::run(&context, &decks, count, !no_record, json)?,
        Commands::Replay {
            session_id,
            no_record,
            json,
        } => commands::mix::replay(&context, &session_id, !no_record, json)?,
        Commands::History { action } => match action {
            HistoryAction::List { limit } => commands::history::list(&context, limit)?,
            HistoryAction::Delete { session_id } => commands::history::delete(&context, &session_id)?,
            HistoryAction::Cleanup => commands::history::cleanup(&context)?,
        },
        Commands::Layout { count } => commands::layout::show(count),
    }

    Ok(())
}
