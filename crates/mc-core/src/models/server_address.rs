use std::fmt;

use serde::{Deserialize, Serialize};

/// Network address players connect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAddress {
    pub ip: String,
    pub port: u16,
}

impl ServerAddress {
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self {
            ip: ip.into(),
            port,
        }
    }

    /// The `ip:port` string copied to the clipboard.
    pub fn connection_string(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    /// Same port, new host.
    pub fn with_ip(&self, ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            port: self.port,
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}
