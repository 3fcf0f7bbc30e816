use std::{fmt::Display, str::FromStr};

/// Longest hostname allowed by RFC 952.
pub const MAX_HOST_LEN: usize = 253;

/// A port is at most five decimal digits.
pub const MAX_PORT_DIGITS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("invalid host {0:?}")]
    InvalidHost(String),
    #[error("missing ':port' in {0:?}")]
    MissingPort(String),
    #[error("invalid port {0:?}")]
    InvalidPort(String),
}

/// A `host:port` pair with the host restricted to `[a-zA-Z0-9.-]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostPort {
    pub host: String,
    pub port: u16,
}

fn is_host_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

impl FromStr for HostPort {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = match s.split_once(':') {
            Some(parts) => parts,
            None if s.chars().all(is_host_char) && !s.is_empty() => {
                return Err(AddressError::MissingPort(s.to_string()))
            }
            None => return Err(AddressError::InvalidHost(s.to_string())),
        };

        if host.is_empty() || host.len() > MAX_HOST_LEN || !host.chars().all(is_host_char) {
            return Err(AddressError::InvalidHost(host.to_string()));
        }

        let invalid_port = || AddressError::InvalidPort(port.to_string());
        if port.is_empty()
            || port.len() > MAX_PORT_DIGITS
            || !port.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid_port());
        }
        let port = port.parse().map_err(|_| invalid_port())?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl Display for HostPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        assert_eq!(
            HostPort::from_str("localhost:8080").unwrap(),
            HostPort {
                host: "localhost".to_string(),
                port: 8080
            }
        );
        assert_eq!(
            HostPort::from_str("127.0.0.1:7").unwrap(),
            HostPort {
                host: "127.0.0.1".to_string(),
                port: 7
            }
        );
        assert_eq!(
            HostPort::from_str("echo-1.example.org:65535").unwrap().to_string(),
            "echo-1.example.org:65535"
        );
    }

    #[test]
    fn rejects_bad_hosts() {
        assert_eq!(
            HostPort::from_str(":8080"),
            Err(AddressError::InvalidHost("".to_string()))
        );
        assert_eq!(
            HostPort::from_str("local_host:8080"),
            Err(AddressError::InvalidHost("local_host".to_string()))
        );
        assert_eq!(
            HostPort::from_str("[::1]:8080"),
            Err(AddressError::InvalidHost("[".to_string()))
        );
        let long = "a".repeat(MAX_HOST_LEN + 1);
        assert_eq!(
            HostPort::from_str(&format!("{long}:80")),
            Err(AddressError::InvalidHost(long))
        );
        assert!(HostPort::from_str(&format!("{}:80", "a".repeat(MAX_HOST_LEN))).is_ok());
    }

    #[test]
    fn rejects_missing_port() {
        assert_eq!(
            HostPort::from_str("localhost"),
            Err(AddressError::MissingPort("localhost".to_string()))
        );
        assert_eq!(
            HostPort::from_str(""),
            Err(AddressError::InvalidHost("".to_string()))
        );
    }

    #[test]
    fn rejects_bad_ports() {
        for (input, port) in [
            ("localhost:", ""),
            ("localhost:http", "http"),
            ("localhost:123456", "123456"),
            ("localhost:65536", "65536"),
            ("localhost:80:81", "80:81"),
            ("localhost:-1", "-1"),
        ] {
            assert_eq!(
                HostPort::from_str(input),
                Err(AddressError::InvalidPort(port.to_string())),
                "{input}"
            );
        }
    }
}
