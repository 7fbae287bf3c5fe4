use activities_core::config::Config;
use activities_core::{io, paths};
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let path = paths::config_path(root);
    let data = render_config(&Config::with_seed_catalog())?;
    let written = io::write_if_missing(&path, data.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    if written {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists, leaving it unchanged", path.display());
    }
    Ok(())
}

fn render_config(config: &Config) -> anyhow::Result<String> {
    let mut out = String::from("# Mergington activities service configuration\n");
    out.push_str(&config.to_yaml()?);
    Ok(out)
}
