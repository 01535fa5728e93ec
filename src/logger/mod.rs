//! Logger module
//!
//! Console logging for server lifecycle and per-request access lines.

use std::net::SocketAddr;

use hyper::{Method, Uri, Version};

use crate::config::Config;

/// Startup banner listing the URL and available routes
pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!();
    println!("Available routes:");
    println!("  /            Home page");
    println!("  /about       About page");
    println!("  /stats       Server statistics");
    println!("  /time        Current server time");
    println!("  /greet?name  Personalized greeting");
    println!();
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] Sent {status} ({size} bytes)\n");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
