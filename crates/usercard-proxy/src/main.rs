use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use usercard_core::config::{DEFAULT_PROXY_PORT, RANDOM_USER_API_URL};
use usercard_core::logging::LoggingBuilder;
use usercard_proxy::{router, ProxyState};

/// User Card proxy - forwards /user to the random-user API
#[derive(Parser, Debug)]
#[command(name = "usercard-proxy")]
#[command(about = "HTTP proxy serving one random user per request")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PROXY_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Upstream random-user endpoint
    #[arg(long, env = "RANDOM_USER_API_URL", default_value = RANDOM_USER_API_URL)]
    upstream: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LoggingBuilder::new()
        .with_filter("usercard_proxy=info,tower_http=info")
        .init()?;

    let args = Args::parse();
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;

    let app = router(ProxyState::new(args.upstream.clone()));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Proxy listening on http://{} (upstream {})", addr, args.upstream);
    axum::serve(listener, app).await?;
    Ok(())
}
