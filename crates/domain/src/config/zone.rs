use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

use super::errors::ConfigError;

/// A host we serve fixed addresses for, e.g. the project's own web server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct WebHostConfig {
    pub name: String,

    pub ipv4: Ipv4Addr,

    pub ipv6: Ipv6Addr,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NameserverConfig {
    pub name: String,

    pub ipv4: Ipv4Addr,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// SOA RNAME, in mailbox-as-domain form.
    #[serde(default = "default_hostmaster")]
    pub hostmaster: String,

    #[serde(default = "default_mx_host")]
    pub mx_host: String,

    #[serde(default = "default_web_hosts")]
    pub web_hosts: Vec<WebHostConfig>,

    /// Served in this order for NS questions.
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<NameserverConfig>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            hostmaster: default_hostmaster(),
            mx_host: default_mx_host(),
            web_hosts: default_web_hosts(),
            nameservers: default_nameservers(),
        }
    }
}

impl ZoneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_fqdn("hostmaster", &self.hostmaster)?;
        require_fqdn("mx_host", &self.mx_host)?;

        for host in &self.web_hosts {
            require_fqdn("web_hosts.name", &host.name)?;
        }

        if self.nameservers.is_empty() {
            return Err(ConfigError::InvalidZone(
                "At least one nameserver must be configured".to_string(),
            ));
        }
        for ns in &self.nameservers {
            require_fqdn("nameservers.name", &ns.name)?;
        }

        Ok(())
    }
}

fn require_fqdn(field: &str, name: &str) -> Result<(), ConfigError> {
    if name.len() < 2 || !name.ends_with('.') || name.contains("..") {
        return Err(ConfigError::InvalidZone(format!(
            "{} must be a fully-qualified name ending in '.', got '{}'",
            field, name
        )));
    }
    Ok(())
}

fn default_hostmaster() -> String {
    "briancunnie.gmail.com.".to_string()
}

fn default_mx_host() -> String {
    "mail.protonmail.ch.".to_string()
}

fn default_web_hosts() -> Vec<WebHostConfig> {
    vec![WebHostConfig {
        name: "sslip.io.".to_string(),
        ipv4: Ipv4Addr::new(78, 46, 204, 247),
        ipv6: Ipv6Addr::new(0x2a01, 0x4f8, 0xc17, 0xb8f, 0, 0, 0, 2),
    }]
}

fn default_nameservers() -> Vec<NameserverConfig> {
    vec![
        NameserverConfig {
            name: "ns-aws.nono.io.".to_string(),
            ipv4: Ipv4Addr::new(52, 0, 56, 137),
        },
        NameserverConfig {
            name: "ns-azure.nono.io.".to_string(),
            ipv4: Ipv4Addr::new(52, 187, 42, 158),
        },
        NameserverConfig {
            name: "ns-gce.nono.io.".to_string(),
            ipv4: Ipv4Addr::new(104, 155, 144, 4),
        },
    ]
}
