use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use crate::{Res, api, error::Error, info, warning};

/// Handle on the running OAuth callback server.
///
/// The server lives exactly as long as one login attempt: [`stop`] shuts
/// it down in an orderly way, and dropping the handle shuts it down too,
/// so an aborted login never leaves a stale listener holding the port.
///
/// [`stop`]: CallbackServer::stop
pub struct CallbackServer {
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl CallbackServer {
    /// Binds the callback endpoint on the given port and starts serving
    /// in a background task.
    pub async fn start(port: u16, state: Arc<api::CallbackState>) -> Res<Self> {
        let app = Router::new().route("/callback", get(api::callback).layer(Extension(state)));

        let listener = TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(|e| Error::Other(format!("cannot bind callback port {port}: {e}")))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });

            if let Err(e) = serve.await {
                warning!("Callback server stopped with an error: {e}");
            }
        });

        info!("Callback server listening on port {port}");

        Ok(CallbackServer {
            shutdown: Some(shutdown_tx),
            handle,
        })
    }

    /// Stops the server and waits for it to wind down.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        let _ = (&mut self.handle).await;
    }
}

impl Drop for CallbackServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
