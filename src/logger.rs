use std::net::SocketAddr;
use std::sync::atomic::{AtomicU8, Ordering};

use hyper::{Method, Uri, Version};

use crate::config::Config;

/// Log severity, parsed from the `logging.level` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
}

impl LogLevel {
    /// Parse a config string; unknown values fall back to `Info`.
    pub fn parse(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            _ => Self::Info,
        }
    }

    /// Whether a message at `message_level` passes this threshold.
    pub const fn allows(self, message_level: Self) -> bool {
        message_level as u8 <= self as u8
    }
}

static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Apply the configured log level. Called once at startup.
pub fn init(config: &Config) {
    MAX_LEVEL.store(LogLevel::parse(&config.logging.level) as u8, Ordering::Relaxed);
}

fn enabled(message_level: LogLevel) -> bool {
    message_level as u8 <= MAX_LEVEL.load(Ordering::Relaxed)
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("User registry server started");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Static directory: {}", config.resources.static_dir);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    if enabled(LogLevel::Info) {
        println!("[Connection] Accepted from: {peer_addr}");
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    if enabled(LogLevel::Info) {
        println!("[Request] {method} {uri} {version:?}");
    }
}

pub fn log_headers_count(count: usize, show: bool) {
    if show && enabled(LogLevel::Info) {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_response(status: u16, size: u64) {
    if enabled(LogLevel::Info) {
        println!("[Response] {status} ({size} bytes)\n");
    }
}

pub fn log_user_registered(id: u64, name: &str) {
    if enabled(LogLevel::Info) {
        println!("[Store] Registered user #{id}: {name}");
    }
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        eprintln!("[WARN] {message}");
    }
}
