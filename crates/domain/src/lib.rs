//! sslip-dns Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod hostname_address;
pub mod static_records;

pub use config::{CliOverrides, Config, ConfigError, ZoneConfig};
pub use dns_message::{
    DecodedQuery, QueryHeader, Question, ResponseCode, ResponseHeader, ResponseMessage, CLASS_IN,
};
pub use dns_record::{
    DnsRecord, RecordData, RecordType, ResolutionOutcome, SoaData, RECORD_TTL,
};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use static_records::{StaticRecordStore, WebHost};
