use anyhow::Result;
use clap::Parser;
use snake::game::GameConfig;
use snake::modes::PlayMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Terminal snake arcade game")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "40")]
    width: i32,

    /// Grid height
    #[arg(long, default_value = "22")]
    height: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so log output never fights the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height);

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}
