//! Logger module
//!
//! Logging for the asset server:
//! - Server lifecycle logging
//! - Per-request access logging
//! - Error and warning logging
//! - Optional file-based log targets
//!
//! Logging is a side channel: nothing here influences the response a request
//! receives.

pub mod writer;

use std::net::SocketAddr;
use std::path::Path;

use chrono::Local;
use hyper::Method;

use crate::config::Config;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_info(message: &str) {
    write_info(message);
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, build_root: &Path) {
    write_info("======================================");
    write_info("tagdeck asset server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Build root: {}", build_root.display()));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

/// Log one access line with a local timestamp
pub fn log_request(method: &Method, path: &str) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    write_info(&format!("[{now}] {method} {path}"));
}

pub fn log_response(status: u16, path: &str) {
    write_info(&format!("[Response] {status} {path}"));
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    write_info(&format!("[API] {method} {path} - {status}"));
}
