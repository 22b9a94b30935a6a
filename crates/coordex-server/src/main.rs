//! `coordex` binary: HTTP extraction service, or a one-shot run with `--input`.

mod cli;
mod extract_cmd;
mod handlers;
mod page;
mod response;
mod server;

use std::net::SocketAddr;

use clap::Parser;
use cli::Cli;
use coordex::ExtractOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coordex=info,coordex_core=info,coordex_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let options = ExtractOptions::default();

    if let Some(input) = cli.input.as_deref() {
        if let Err(code) = extract_cmd::run(input, &options) {
            std::process::exit(code);
        }
        return Ok(());
    }

    let addr = SocketAddr::new(cli.host, cli.port());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting coordex");
    server::serve(
        addr,
        server::AppState::new(options),
        server::shutdown_signal(),
    )
    .await
}
