//! Binary entry point, grounded in `api/examples/simple.rs`'s
//! `tracing_subscriber::fmt::init()` pattern and `flex/src/main.rs`'s
//! `clap::Parser` verbosity flag.
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use ibkr_gateway::config::Config;
use ibkr_gateway::gateway::Gateway;
use ibkr_gateway::http;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opt {
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let opt = Opt::parse();
    let level = match opt.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!("ibkr_gateway={level}")))
        .init();

    let config = Config::from_env();
    let listen = (config.listen_host.clone(), config.listen_port);

    tracing::info!(?listen, "starting ibkr-gateway");
    let gateway = Arc::new(Gateway::connect(config).map_err(std::io::Error::other)?);

    HttpServer::new(move || {
        App::new().app_data(web::Data::new(gateway.clone())).configure(http::configure)
    })
    .bind(listen)?
    .run()
    .await
}
