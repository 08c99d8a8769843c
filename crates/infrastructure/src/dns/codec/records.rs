use super::names::to_hickory_name;
use hickory_proto::rr::rdata::{A, AAAA, MX, NS, SOA};
use hickory_proto::rr::{RData, Record};
use sslip_dns_domain::{DnsRecord, DomainError, RecordData, SoaData};

/// Converts a domain record into a hickory `IN` record.
pub fn to_hickory_record(record: &DnsRecord) -> Result<Record, DomainError> {
    let owner = to_hickory_name(&record.name)?;

    let rdata = match &record.data {
        RecordData::A(ip) => RData::A(A(*ip)),
        RecordData::Aaaa(ip) => RData::AAAA(AAAA(*ip)),
        RecordData::Ns(host) => RData::NS(NS(to_hickory_name(host)?)),
        RecordData::Mx {
            preference,
            exchange,
        } => RData::MX(MX::new(*preference, to_hickory_name(exchange)?)),
        RecordData::Soa(soa) => RData::SOA(to_hickory_soa(soa)?),
    };

    Ok(Record::from_rdata(owner, record.ttl, rdata))
}

fn to_hickory_soa(soa: &SoaData) -> Result<SOA, DomainError> {
    Ok(SOA::new(
        to_hickory_name(&soa.mname)?,
        to_hickory_name(&soa.rname)?,
        soa.serial,
        soa_interval(soa.refresh, "refresh")?,
        soa_interval(soa.retry, "retry")?,
        soa_interval(soa.expire, "expire")?,
        soa.minimum,
    ))
}

// hickory models refresh/retry/expire as signed 32-bit values
fn soa_interval(value: u32, field: &str) -> Result<i32, DomainError> {
    i32::try_from(value)
        .map_err(|_| DomainError::EncodingFailure(format!("SOA {} out of range: {}", field, value)))
}
