use std::collections::HashMap;
use std::net::SocketAddr;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() {
    if let Err(err) = run() {
        logger::log_error(&format!("Failed to boot server: {err}"));
        std::process::exit(1);
    }
}

/// Validate the environment, build the runtime, and serve.
///
/// All startup validation runs before the listener binds; any failure
/// propagates here and terminates the process with a non-zero status.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env: HashMap<String, String> = std::env::vars().collect();

    let cfg = config::Config::load_from(&env)?;
    let port = config::resolve_port(&env)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg, port))
}

async fn async_main(cfg: config::Config, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    server::serve(listener).await
}
