use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server running on http://{}", addr);
    println!("Database path: {}", config.opencode_db_path);
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {}", peer_addr);
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {:?}", err);
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!(
        "[{}] [Request] {} {} {:?}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        uri,
        version
    );
}

pub fn log_error(message: &str) {
    eprintln!("[Error] {}", message);
}
