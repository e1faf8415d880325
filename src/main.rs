use anyhow::Result;
use clap::Parser;
use snake_chase::game::GameConfig;
use snake_chase::modes::ArcadeMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_chase")]
#[command(version, about = "Terminal snake arcade game with an AI pursuer")]
struct Cli {
    /// Number of cells along each grid axis
    #[arg(long, default_value = "30")]
    grid: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI owns stdout; logs go to stderr, off by default.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.grid);

    let mut arcade = ArcadeMode::new(config)?;
    arcade.run().await?;

    Ok(())
}
