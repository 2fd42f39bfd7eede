use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use graphreplay::{output_prefix, render_frames, Config, GameRecord};


fn main() -> Result<()>
{
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = Config::parse();

    let Some(path) = config.path.as_ref() else
    {
        println!("No file-path provided.");
        return Ok(());
    };

    let record = GameRecord::read_file(path, config.parse_options())
        .with_context(|| format!("failed to load game log {}", path.display()))?;

    info!(
        "{} ({}) played {} moves",
        record.player_name,
        record.player_role.map(|role| role.name()).unwrap_or("no role"),
        record.moves.len()
    );

    if config.dump
    {
        print!("{record}");
        return Ok(());
    }

    let prefix = output_prefix(path);

    render_frames(&record, &prefix, config.renderer_config())
        .with_context(|| format!("failed to render {}", path.display()))?;

    Ok(())
}
