use anyhow::{Result, bail};

use super::Context;

pub fn list(context: &Context, limit: Option<usize>) -> Result<()> {
    let history = context.service.history();
    let sessions = match limit {
        Some(limit) => history.recent(limit)?,
        None => history.recent_default()?,
    };

    if sessions.is_empty() {
        println!("No mixing sessions recorded");
        return Ok(());
    }

    for session in sessions {
        println!(
            "{}  {}  {} cards from {}",
            session.id,
            session.timestamp.format("%Y-%m-%d %H:%M"),
            session.card_count,
            session.selected_deck_ids.join(", ")
        );
    }
    Ok(())
}

pub fn delete(context: &Context, session_id: &str) -> Result<()> {
    if !context.service.history().delete(session_id)? {
        bail!("No mixing session with id {}", session_id);
    }
    println!("Deleted mixing session {}", session_id);
    Ok(())
}

pub fn cleanup(context: &Context) -> Result<()> {
    let removed = context.service.history().cleanup()?;
    println!("Removed {} expired mixing sessions", removed);
    Ok(())
}
