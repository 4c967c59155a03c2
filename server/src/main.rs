mod game_store;
mod web_server;

use clap::Parser;

use connect_four_engine::config::BoardConfig;
use connect_four_engine::{log, logger};
use game_store::GameStore;

const DEFAULT_CONFIG_PATH: &str = "connect_four_server_config.yaml";
const LISTEN_ADDR: &str = "0.0.0.0:5000";

#[derive(Parser)]
#[command(name = "connect_four_server")]
struct Args {
    /// Path to the board config YAML file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let board_config = BoardConfig::from_yaml_file(&args.config)?;
    log!(
        "Connect Four server starting with a {}x{} board",
        board_config.rows,
        board_config.columns
    );

    let store = GameStore::new(board_config);
    web_server::run_web_server(store, LISTEN_ADDR).await?;

    log!("Server shut down gracefully");

    Ok(())
}
