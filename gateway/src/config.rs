//! Env-sourced configuration, in the style of `flex/src/config.rs`
//! (`env::var(...).unwrap_or_else`) rather than a config file format.
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Host of the upstream TWS/IB Gateway socket API.
    pub gateway_host: String,
    /// Port of the upstream TWS/IB Gateway socket API.
    pub gateway_port: u16,
    /// Host this gateway's own HTTP server binds to.
    pub listen_host: String,
    /// Port this gateway's own HTTP server binds to.
    pub listen_port: u16,
    /// Number of upstream connections in the pool, one of which is
    /// reserved for order placement.
    pub pool_size: usize,
    /// Number of 250ms iterations the default wait budget allows.
    pub poll_timeout_iters: u32,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            gateway_host: env_or("GATEWAY_HOST", "127.0.0.1"),
            gateway_port: env_parsed("GATEWAY_PORT", 7496),
            listen_host: env_or("LISTEN_HOST", "0.0.0.0"),
            listen_port: env_parsed("LISTEN_PORT", 5000),
            pool_size: env_parsed("POOL_SIZE", 3),
            poll_timeout_iters: env_parsed("POLL_TIMEOUT_ITERS", 20),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gateway_host: "127.0.0.1".to_string(),
            gateway_port: 7496,
            listen_host: "0.0.0.0".to_string(),
            listen_port: 5000,
            pool_size: 3,
            poll_timeout_iters: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let c = Config::default();
        assert_eq!(c.pool_size, 3);
        assert_eq!(c.poll_timeout_iters, 20);
        assert_eq!(c.listen_port, 5000);
    }
}
