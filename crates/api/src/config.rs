//! Environment-driven configuration for the HTTP binary.
//!
//! The domain logic consumes no configuration; everything here is ambient
//! (where to listen, how long idle sessions live). Unset variables use the
//! defaults; invalid overrides log a warning and fall back rather than
//! aborting startup.

use std::net::SocketAddr;
use std::time::Duration as StdDuration;

use chrono::Duration;

const DEFAULT_SESSION_IDLE_SECS: i64 = 1800;
const DEFAULT_SWEEP_INTERVAL_SECS: i64 = 60;

#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    /// `STOCKROOM_ADDR`, default `0.0.0.0:8080`.
    pub bind_addr: SocketAddr,
    /// `STOCKROOM_SESSION_IDLE_SECS`, default 1800.
    pub session_max_idle: Duration,
    /// `STOCKROOM_SWEEP_INTERVAL_SECS`, default 60.
    pub sweep_interval: StdDuration,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let default_addr = SocketAddr::from(([0, 0, 0, 0], 8080));
        let bind_addr = match std::env::var("STOCKROOM_ADDR") {
            Err(_) => default_addr,
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("STOCKROOM_ADDR {raw:?} is not a socket address; using {default_addr}");
                default_addr
            }),
        };

        Self {
            bind_addr,
            session_max_idle: Duration::seconds(positive_secs(
                "STOCKROOM_SESSION_IDLE_SECS",
                DEFAULT_SESSION_IDLE_SECS,
            )),
            sweep_interval: StdDuration::from_secs(positive_secs(
                "STOCKROOM_SWEEP_INTERVAL_SECS",
                DEFAULT_SWEEP_INTERVAL_SECS,
            ) as u64),
        }
    }
}

fn positive_secs(name: &str, default: i64) -> i64 {
    match std::env::var(name) {
        Err(_) => default,
        Ok(raw) => match raw.trim().parse::<i64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                tracing::warn!("{name} {raw:?} is not a positive number of seconds; using {default}");
                default
            }
        },
    }
}
