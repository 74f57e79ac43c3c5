use clap::{value_parser, Arg, Command};
use roadmap_store::{serve, SnapshotStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Command::new("roadmap-server")
        .version("0.1.0")
        .about("In-memory roadmap snapshot store")
        .arg(
            Arg::new("port")
                .long("port")
                .value_parser(value_parser!(u16))
                .help("Port to listen on (defaults to $PORT, then 3001)"),
        );

    let matches = cli.get_matches();

    let port = match matches.get_one::<u16>("port") {
        Some(port) => *port,
        None => match std::env::var("PORT") {
            Ok(raw) => raw.parse()?,
            Err(_) => 3001,
        },
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let store = Arc::new(SnapshotStore::seeded());

    tracing::info!("backend running on {}", addr);
    serve(store, addr).await;

    Ok(())
}
