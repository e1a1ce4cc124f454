//! League settings command implementation

use crate::{
    cli::LeagueSelect,
    commands::resolve_league,
    yahoo::http::YahooClient,
    yahoo::settings::{StatLabelMap, StatWeightMap},
    yahoo::settings_cache::{league_settings_path, load_or_fetch_league_settings},
    Result,
};

/// Handle the league settings command
pub async fn handle_league_data(select: LeagueSelect, refresh: bool, verbose: bool) -> Result<()> {
    let client = YahooClient::from_env()?;
    let league = resolve_league(&client, &select).await?;

    if refresh {
        println!("Fetching fresh league settings from Yahoo...");
    } else {
        println!("Loading league settings (cached if available)...");
    }

    let settings = load_or_fetch_league_settings(&client, &league, refresh).await?;
    let labels = StatLabelMap::resolve(&settings);
    let weights = StatWeightMap::resolve(&settings);

    println!("✓ League settings loaded successfully");

    if verbose {
        let path = league_settings_path(&league);
        println!("League settings cached at: {}", path.display());
        println!("League: {}", league);
        for (cat, stat_id) in labels.iter() {
            println!("  {:<5} -> stat id {}", cat.abbr(), stat_id);
        }
        println!(
            "Resolved {} of 8 stat categories, {} scoring weights",
            labels.len(),
            weights.len()
        );
    }

    Ok(())
}
