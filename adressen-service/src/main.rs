use std::sync::Arc;

use adressen::Adressen;
use adressen_http::HttpUpstream;
use adressen_service::{Args, logging, router};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_format)?;

    let upstream = HttpUpstream::builder().build()?;
    let adressen = Adressen::builder()
        .with_upstream(Arc::new(upstream))
        .config(args.to_config())
        .build()?;

    let addr = args.addr();
    tracing::info!(%addr, strategy = ?adressen.config().search_strategy, "adressen-service listening");

    hyper::Server::bind(&addr)
        .serve(router(Arc::new(adressen)).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
