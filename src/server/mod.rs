// Server module entry point
// Provides listener creation and the connection accept loop.

pub mod listener;

// Re-export commonly used functions
pub use listener::create_reusable_listener;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::handler;
use crate::logger;

/// Accept connections forever, serving each on its own task.
///
/// The dispatcher is a pure function with no shared state, so every
/// connection can be served independently.
pub async fn serve(listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                logger::log_connection_accepted(&peer_addr);
                handle_connection(stream);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo` and drives an HTTP/1.1 connection
/// with the request dispatcher as its service.
fn handle_connection(stream: tokio::net::TcpStream) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service_fn(|req| handler::handle_request(req)));

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
