//! Draft command: toggle drafted status per player id, or clear the set.

use std::collections::HashMap;

use crate::{
    storage::persist::StateFiles,
    view::store::ViewState,
    Result,
};

/// Handle the draft command.
///
/// Clearing requires `--yes`; without it the command prints a refusal and
/// does nothing. Toggling accepts any id, including ids the current dataset
/// does not carry (a stale id simply never renders).
pub fn handle_draft(ids: Vec<String>, clear: bool, yes: bool) -> Result<()> {
    let files = StateFiles::open();
    let mut state = ViewState::load(files);

    if clear {
        if !yes {
            println!(
                "Refusing to clear {} drafted players without --yes.",
                state.drafted().len()
            );
            return Ok(());
        }
        state.clear_drafted();
        println!("✓ Drafted set cleared");
        return Ok(());
    }

    if ids.is_empty() {
        println!("No player ids given; nothing to do.");
        return Ok(());
    }

    // Dataset is optional here; it only improves the confirmation lines.
    let dataset = state.files().load_dataset();
    if let Some(rows) = dataset {
        state.load_players(rows);
    }
    let names: HashMap<String, String> = state
        .players()
        .iter()
        .map(|p| (p.player_id.clone(), p.name.clone()))
        .collect();

    for id in &ids {
        let now_drafted = state.toggle_drafted(id);
        let label = names.get(id).cloned().unwrap_or_else(|| id.clone());
        println!(
            "✓ {} {}",
            if now_drafted { "Drafted" } else { "Undrafted" },
            label
        );
    }

    if !state.players().is_empty() {
        let c = state.counts();
        println!(
            "Drafted: {}  Remaining: {}  Total: {}",
            c.drafted, c.remaining, c.total
        );
    }

    Ok(())
}
