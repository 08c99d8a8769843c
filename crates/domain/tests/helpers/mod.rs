#![allow(dead_code)]
use sslip_dns_domain::config::{NameserverConfig, WebHostConfig};
use sslip_dns_domain::ZoneConfig;
use std::net::{Ipv4Addr, Ipv6Addr};

pub struct ZoneConfigBuilder {
    zone: ZoneConfig,
}

impl ZoneConfigBuilder {
    pub fn new() -> Self {
        Self {
            zone: ZoneConfig::default(),
        }
    }

    pub fn empty() -> Self {
        Self {
            zone: ZoneConfig {
                web_hosts: vec![],
                nameservers: vec![],
                ..ZoneConfig::default()
            },
        }
    }

    pub fn hostmaster(mut self, hostmaster: &str) -> Self {
        self.zone.hostmaster = hostmaster.to_string();
        self
    }

    pub fn mx_host(mut self, mx_host: &str) -> Self {
        self.zone.mx_host = mx_host.to_string();
        self
    }

    pub fn web_host(mut self, name: &str, ipv4: &str, ipv6: &str) -> Self {
        self.zone.web_hosts.push(WebHostConfig {
            name: name.to_string(),
            ipv4: ipv4.parse::<Ipv4Addr>().unwrap(),
            ipv6: ipv6.parse::<Ipv6Addr>().unwrap(),
        });
        self
    }

    pub fn nameserver(mut self, name: &str, ipv4: &str) -> Self {
        self.zone.nameservers.push(NameserverConfig {
            name: name.to_string(),
            ipv4: ipv4.parse().unwrap(),
        });
        self
    }

    pub fn build(self) -> ZoneConfig {
        self.zone
    }
}

/// Spells `address` the way it appears inside a host name label.
pub fn hyphenate(address: &str) -> String {
    address.replace([':', '.'], "-")
}
