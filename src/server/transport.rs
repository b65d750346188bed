//! Accept loop serving the route's router over HTTP/1.
//!
//! Connections are served with hyper directly so that a connection which fails (malformed
//! request, client hanging up mid-message) is logged at error level instead of being dropped
//! silently.

use std::{net::SocketAddr, time::Duration};

use axum::Router;
use dioxus_logger::tracing;
use hyper::server::conn::http1;
use hyper_util::{rt::TokioIo, server::graceful::GracefulShutdown, service::TowerToHyperService};
use tokio::{net::TcpListener, sync::oneshot};

// Pause after a failed accept so a persistent error (e.g. fd exhaustion) does not spin
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(50);

/// Serve `app` on `listener` until `shutdown` fires, then wait for open connections to finish.
pub(crate) async fn serve(listener: TcpListener, app: Router, mut shutdown: oneshot::Receiver<()>) {
    let addr = listener.local_addr().ok();
    let graceful = GracefulShutdown::new();

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        tracing::error!(?addr, "Mock server failed to accept a connection: {}", e);
                        tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                        continue;
                    }
                };

                let connection = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), TowerToHyperService::new(app.clone()));
                let connection = graceful.watch(connection);

                tokio::spawn(async move {
                    if let Err(e) = connection.await {
                        log_connection_error(peer, &e);
                    }
                });
            }
        }
    }

    drop(listener);
    graceful.shutdown().await;
}

fn log_connection_error(peer: SocketAddr, e: &hyper::Error) {
    tracing::error!(
        %peer,
        parse = e.is_parse(),
        incomplete = e.is_incomplete_message(),
        "Mock server connection failed: {}",
        e
    );
}
