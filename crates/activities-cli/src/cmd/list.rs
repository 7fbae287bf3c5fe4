use crate::output::{print_json, print_table};
use activities_core::config::Config;
use anyhow::Context;
use std::path::Path;

/// Print the catalog the server would start with.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load config")?;
    let catalog = config.catalog();

    if json {
        return print_json(&catalog);
    }

    let rows = catalog
        .iter()
        .map(|(name, a)| {
            vec![
                name.clone(),
                a.schedule.clone(),
                a.participants.len().to_string(),
                a.max_participants.to_string(),
            ]
        })
        .collect();
    print_table(&["NAME", "SCHEDULE", "ENROLLED", "CAPACITY"], rows);
    Ok(())
}
