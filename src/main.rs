use anyhow::{Result, bail};
use arcade_snake::app::App;
use arcade_snake::game::GameConfig;
use clap::Parser;

#[derive(Parser)]
#[command(name = "arcade_snake")]
#[command(version, about = "Terminal Snake arcade game")]
struct Cli {
    /// Grid width in cells, wall ring included
    #[arg(long, default_value = "20")]
    width: u16,

    /// Grid height in cells, wall ring included
    #[arg(long, default_value = "20")]
    height: u16,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

/// The interior must hold the starting snake laid out from the center plus
/// at least one free cell for the apple.
fn validate(config: &GameConfig) -> Result<()> {
    let interior_width = i64::from(config.grid_width) - 2;
    let interior_height = i64::from(config.grid_height) - 2;

    if interior_width < 1 || interior_height < 1 {
        bail!(
            "grid {}x{} has no interior inside the wall ring",
            config.grid_width,
            config.grid_height
        );
    }

    let tail_col = i64::from(config.grid_width) / 2 - (config.initial_snake_length as i64 - 1);
    if tail_col < 1 {
        bail!(
            "grid width {} cannot hold a snake of {} cells from the center",
            config.grid_width,
            config.initial_snake_length
        );
    }

    if interior_width * interior_height <= config.initial_snake_length as i64 {
        bail!(
            "grid {}x{} has no room left for an apple",
            config.grid_width,
            config.grid_height
        );
    }

    if config.tick_millis == 0 {
        bail!("tick interval must be at least 1 ms");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.tick_millis = cli.tick_ms;
    validate(&config)?;

    let mut app = App::new(config);
    app.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&GameConfig::default()).is_ok());
        assert!(validate(&GameConfig::small()).is_ok());
    }

    #[test]
    fn test_degenerate_grids_rejected() {
        assert!(validate(&GameConfig::new(2, 20)).is_err());
        assert!(validate(&GameConfig::new(20, 1)).is_err());
        // wide enough for an interior but not for the starting snake
        assert!(validate(&GameConfig::new(4, 20)).is_err());
    }

    #[test]
    fn test_zero_tick_rejected() {
        let mut config = GameConfig::default();
        config.tick_millis = 0;
        assert!(validate(&config).is_err());
    }
}
