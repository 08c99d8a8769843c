use super::RecordType;
use crate::domain_name::DomainName;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// TTL carried by every record this server emits (one week).
pub const RECORD_TTL: u32 = 604_800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: DomainName,
    pub rname: DomainName,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(DomainName),
    Mx { preference: u16, exchange: DomainName },
    Soa(SoaData),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Soa(_) => RecordType::SOA,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(ip) => write!(f, "{}", ip),
            RecordData::Aaaa(ip) => write!(f, "{}", ip),
            RecordData::Ns(_) => f.write_str("NS"),
            RecordData::Mx { .. } => f.write_str("MX"),
            RecordData::Soa(_) => f.write_str("SOA"),
        }
    }
}

/// A resource record ready to hand to the codec. The type tag always comes
/// from the data, never from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: DomainName,

    pub ttl: u32,

    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: impl Into<DomainName>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl: RECORD_TTL,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
