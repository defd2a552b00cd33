mod config;
mod files;
mod http;
mod server;

use config::Config;
use server::listener::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()>{
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let srv = Server::bind(&cfg).await?;

    tokio::select! {
        res = srv.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
