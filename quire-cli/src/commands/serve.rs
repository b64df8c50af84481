//! HTTP serving command

use crate::error::CliResult;
use clap::Args;
use quire_core::{Node, Thresholds};
use quire_server::{AppState, ServerConfig};
use std::sync::Arc;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Appearances a name must exceed to be confirmed
    #[arg(long, default_value_t = 3)]
    pub min_appearance: u64,

    /// Non-sentence-initial appearances a name must exceed
    #[arg(long, default_value_t = 1)]
    pub min_non_first: u64,

    /// Top characters to include per chapter profile
    #[arg(short, long, default_value_t = 3)]
    pub top: usize,
}

impl ServeArgs {
    /// Hand the processed work to the HTTP display server and block.
    pub fn execute(&self, root: Node) -> CliResult<()> {
        let config = ServerConfig::new(self.host.clone(), self.port);
        let state = AppState {
            root: Arc::new(root),
            thresholds: Thresholds {
                min_appearance: self.min_appearance,
                min_non_first: self.min_non_first,
            },
            top_characters: self.top,
        };
        println!(
            "To browse the work, open http://{}/ in a web browser.",
            config.addr()
        );
        quire_server::serve_blocking(config, state)?;
        Ok(())
    }
}
