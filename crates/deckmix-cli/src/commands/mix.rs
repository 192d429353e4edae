use anyhow::Result;

use deckmix_application::MixOutcome;

use super::Context;

pub fn run(context: &Context, decks: &[String], count: i64, record: bool, json: bool) -> Result<()> {
    let outcome = context.service.mix(decks, count, record)?;
    print_outcome(&outcome, json)
}

pub fn replay(context: &Context, session_id: &str, record: bool, json: bool) -> Result<()> {
    let outcome = context.service.replay(session_id, record)?;
    print_outcome(&outcome, json)
}

fn print_outcome(outcome: &MixOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!(
        "Mixed {} cards ({} rows x {} cols)",
        outcome.cards.len(),
        outcome.layout.rows,
        outcome.layout.cols
    );
    for mixed in &outcome.cards {
        println!(
            "  {:>3}. [{}] {} / {}",
            mixed.position + 1,
            mixed.deck_name,
            mixed.card.front,
            mixed.card.back
        );
    }
    if let Some(session) = &outcome.session {
        println!("Saved to history as {}", session.id);
    }
    Ok(())
}
