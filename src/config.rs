//! Process configuration.
//!
//! Read once in `main`, then handed to [`HealthHandler::new`] and
//! [`Server::bind`]. Nothing on the request path looks at the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PORT` | `8080` | listen port, also reported in every response |
//! | `BODY_READ_TIMEOUT_SECS` | unset | cap on how long a POST body read may take |
//!
//! [`HealthHandler::new`]: crate::HealthHandler::new
//! [`Server::bind`]: crate::Server::bind

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::Error;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;

const PORT_VAR: &str = "PORT";
const BODY_READ_TIMEOUT_VAR: &str = "BODY_READ_TIMEOUT_SECS";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// `None` keeps body reads unbounded: a client that declares more bytes
    /// than it sends holds its connection until it sends or hangs up.
    pub body_read_timeout: Option<Duration>,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| Error::Config {
                var: PORT_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let body_read_timeout = match lookup(BODY_READ_TIMEOUT_VAR) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self { host: DEFAULT_HOST, port, body_read_timeout })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT, body_read_timeout: None }
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, Error> {
    let invalid = |reason: String| Error::Config {
        var: BODY_READ_TIMEOUT_VAR,
        value: raw.to_owned(),
        reason,
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be a positive number of seconds".to_owned())),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn port_is_taken_from_the_environment() {
        let config = load(&[("PORT", "9090")]).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.addr().port(), 9090);
    }

    #[test]
    fn port_tolerates_surrounding_whitespace() {
        assert_eq!(load(&[("PORT", " 9090\n")]).unwrap().port, 9090);
    }

    #[test]
    fn non_numeric_port_is_a_config_error() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, Error::Config { var: "PORT", .. }));
    }

    #[test]
    fn out_of_range_port_is_a_config_error() {
        assert!(matches!(load(&[("PORT", "70000")]), Err(Error::Config { .. })));
    }

    #[test]
    fn body_read_timeout_is_opt_in() {
        assert_eq!(load(&[]).unwrap().body_read_timeout, None);
        assert_eq!(
            load(&[("BODY_READ_TIMEOUT_SECS", "30")]).unwrap().body_read_timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn zero_or_garbage_timeout_is_rejected() {
        assert!(load(&[("BODY_READ_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("BODY_READ_TIMEOUT_SECS", "soon")]).is_err());
    }
}
