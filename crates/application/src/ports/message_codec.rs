use sslip_dns_domain::{DecodedQuery, DomainError, ResponseMessage};

/// Wire-format boundary. The use cases never build DNS bytes themselves.
pub trait MessageCodec: Send + Sync {
    /// Parse the header and every question of a raw query.
    ///
    /// Fails with `DomainError::MalformedInput` when the bytes are not a DNS
    /// message.
    fn decode(&self, query: &[u8]) -> Result<DecodedQuery, DomainError>;

    /// Serialize a complete response with name compression.
    ///
    /// Fails with `DomainError::EncodingFailure` when a record cannot be
    /// represented on the wire.
    fn encode(&self, response: &ResponseMessage) -> Result<Vec<u8>, DomainError>;
}
