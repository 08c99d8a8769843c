use crate::{RecordType, ResponseCode};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported query type {record_type}, RCode: {rcode}")]
    UnsupportedQueryType {
        record_type: RecordType,
        rcode: ResponseCode,
    },

    #[error("Malformed DNS message: {0}")]
    MalformedInput(String),

    #[error("Failed to encode DNS response: {0}")]
    EncodingFailure(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),
}
