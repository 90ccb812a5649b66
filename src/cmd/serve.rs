//! Dashboard server command — `loopboard serve`.

use anyhow::Result;

use loopboard::config::BoardConfig;
use loopboard::server::{ServerConfig, start_server};

pub async fn cmd_serve(port: u16, dev: bool) -> Result<()> {
    let board = BoardConfig::from_env()?;
    start_server(
        ServerConfig {
            port,
            dev_mode: dev,
        },
        board,
    )
    .await
}
