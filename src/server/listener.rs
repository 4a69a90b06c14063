use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app::App;
use crate::config::Config;
use crate::http::connection::Connection;

/// Accept loop. Every connection gets its own task and serves one request.
pub async fn run(cfg: &Config, app: Arc<App>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!(
        addr = %cfg.listen_addr,
        directory = %app.store().root().display(),
        "Listening"
    );

    serve(listener, app, cfg.read_buffer_size).await
}

/// Runs the accept loop on an already bound listener.
pub async fn serve(
    listener: TcpListener,
    app: Arc<App>,
    read_buffer_size: usize,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!(%peer, "Accepted connection");

        let app = Arc::clone(&app);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, app, read_buffer_size);
            if let Err(e) = conn.run().await {
                error!(%peer, error = %e, "Connection error");
            }
        });
    }
}
