use anyhow::{Context, Result};
use clap::Parser;

use gridock::cli::{read_layout, read_script, CliArgs, ReplayConfig, StartLayout};
use gridock::commands::{Cmd, Damage};
use gridock::update::update;
use gridock::AppModel;

// ============================================================================
// REPLAY
// ============================================================================

fn build_model(config: &ReplayConfig) -> Result<AppModel> {
    match &config.start {
        StartLayout::File(path) => {
            let layout = read_layout(path)?;
            AppModel::new(layout, config.grid.clone())
                .with_context(|| format!("Invalid layout in {}", path.display()))
        }
        StartLayout::Demo(demo) => Ok(AppModel::with_demo(*demo, config.grid.clone())),
    }
}

fn replay(model: &mut AppModel, config: &ReplayConfig) -> Result<()> {
    let Some(path) = &config.script else {
        return Ok(());
    };
    let script = read_script(path)?;
    tracing::info!("Replaying {} messages from {}", script.len(), path.display());

    // What a renderer would have repainted over the whole script
    let mut damage = Damage::None;
    for (index, msg) in script.into_iter().enumerate() {
        match update(model, msg) {
            Ok(cmd) => damage.merge(Cmd::from(cmd).damage()),
            Err(e) if config.keep_going => {
                tracing::warn!("Message #{} rejected: {}", index + 1, e);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Message #{} was rejected", index + 1));
            }
        }
    }
    tracing::info!(?damage, "Replay finished");

    if model.is_dragging() {
        tracing::warn!("Script ended mid-gesture; printing the last committed layout");
    }
    Ok(())
}

// ============================================================================
// MAIN - Entry point
// ============================================================================

fn main() -> Result<()> {
    gridock::tracing::init();

    let config = CliArgs::parse().into_config()?;
    let mut model = build_model(&config)?;
    replay(&mut model, &config)?;

    println!("{}", config.format.render(&model.layout)?);
    Ok(())
}
