use crate::config::{ConfigError, ZoneConfig};
use crate::dns_record::{DnsRecord, RecordData, SoaData};
use crate::domain_name::DomainName;
use rustc_hash::FxHashMap;
use std::net::{Ipv4Addr, Ipv6Addr};

pub const SOA_SERIAL: u32 = 2020120100;
// Refresh/retry/expire cribbed from google.com
pub const SOA_REFRESH: u32 = 900;
pub const SOA_RETRY: u32 = 900;
pub const SOA_EXPIRE: u32 = 1800;
pub const SOA_MINIMUM: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebHost {
    pub ipv4: Ipv4Addr,
    pub ipv6: Ipv6Addr,
}

/// Fixed tables consulted before any address extraction. Built once from
/// configuration and never mutated; share it behind an `Arc`.
///
/// All lookups are exact and case-sensitive on the name's labels.
#[derive(Debug, Clone)]
pub struct StaticRecordStore {
    web_hosts: FxHashMap<DomainName, WebHost>,
    nameservers: Vec<(DomainName, Ipv4Addr)>,
    nameserver_index: FxHashMap<DomainName, Ipv4Addr>,
    mx_host: DomainName,
    hostmaster: DomainName,
}

impl StaticRecordStore {
    pub fn from_config(zone: &ZoneConfig) -> Result<Self, ConfigError> {
        zone.validate()?;

        let web_hosts = zone
            .web_hosts
            .iter()
            .map(|host| {
                (
                    DomainName::parse(&host.name),
                    WebHost {
                        ipv4: host.ipv4,
                        ipv6: host.ipv6,
                    },
                )
            })
            .collect();

        let mut nameservers: Vec<(DomainName, Ipv4Addr)> =
            Vec::with_capacity(zone.nameservers.len());
        for ns in &zone.nameservers {
            let name = DomainName::parse(&ns.name);
            if nameservers.iter().any(|(existing, _)| existing == &name) {
                return Err(ConfigError::InvalidZone(format!(
                    "Duplicate nameserver '{}'",
                    ns.name
                )));
            }
            nameservers.push((name, ns.ipv4));
        }
        let nameserver_index = nameservers.iter().cloned().collect();

        Ok(Self {
            web_hosts,
            nameservers,
            nameserver_index,
            mx_host: DomainName::parse(&zone.mx_host),
            hostmaster: DomainName::parse(&zone.hostmaster),
        })
    }

    pub fn lookup_override(&self, name: &DomainName) -> Option<&WebHost> {
        self.web_hosts.get(name)
    }

    pub fn lookup_nameserver(&self, name: &DomainName) -> Option<Ipv4Addr> {
        self.nameserver_index.get(name).copied()
    }

    /// Nameservers in configured order.
    pub fn nameservers(&self) -> &[(DomainName, Ipv4Addr)] {
        &self.nameservers
    }

    pub fn mail_exchange(&self) -> &DomainName {
        &self.mx_host
    }

    pub fn hostmaster(&self) -> &DomainName {
        &self.hostmaster
    }

    /// The SOA record for `owner`; the owner also fills the MNAME field.
    pub fn soa(&self, owner: &DomainName) -> DnsRecord {
        DnsRecord::new(
            owner.clone(),
            RecordData::Soa(SoaData {
                mname: owner.clone(),
                rname: self.hostmaster.clone(),
                serial: SOA_SERIAL,
                refresh: SOA_REFRESH,
                retry: SOA_RETRY,
                expire: SOA_EXPIRE,
                minimum: SOA_MINIMUM,
            }),
        )
    }
}
