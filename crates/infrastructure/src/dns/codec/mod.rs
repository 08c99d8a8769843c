//! DNS wire codec backed by `hickory-proto`.
//!
//! Decoding extracts only what answering needs: the query id, the RD flag and
//! the question section. Encoding writes a complete response message with
//! name compression.

mod names;
mod record_type_map;
mod records;

pub use names::{from_hickory_name, to_hickory_name};
pub use record_type_map::RecordTypeMapper;

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::DNSClass;
use records::to_hickory_record;
use sslip_dns_application::ports::MessageCodec;
use sslip_dns_domain::{
    DecodedQuery, DomainError, QueryHeader, Question, ResponseCode, ResponseMessage,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryCodec;

impl HickoryCodec {
    pub fn new() -> Self {
        Self
    }

    fn to_hickory_query(question: &Question) -> Result<Query, DomainError> {
        let name = to_hickory_name(&question.name)?;
        let class = DNSClass::from_u16(question.class)
            .map_err(|e| DomainError::EncodingFailure(format!("Invalid class: {}", e)))?;

        let mut query = Query::query(name, RecordTypeMapper::to_hickory(question.record_type));
        query.set_query_class(class);
        Ok(query)
    }

    fn to_hickory_rcode(rcode: ResponseCode) -> HickoryResponseCode {
        match rcode {
            ResponseCode::NoError => HickoryResponseCode::NoError,
            ResponseCode::FormErr => HickoryResponseCode::FormErr,
            ResponseCode::ServFail => HickoryResponseCode::ServFail,
            ResponseCode::NXDomain => HickoryResponseCode::NXDomain,
            ResponseCode::NotImp => HickoryResponseCode::NotImp,
            ResponseCode::Refused => HickoryResponseCode::Refused,
        }
    }
}

impl MessageCodec for HickoryCodec {
    fn decode(&self, query: &[u8]) -> Result<DecodedQuery, DomainError> {
        let message = Message::from_vec(query).map_err(|e| {
            debug!(error = %e, len = query.len(), "Failed to parse DNS message");
            DomainError::MalformedInput(e.to_string())
        })?;

        let questions = message
            .queries()
            .iter()
            .map(|q| Question {
                name: from_hickory_name(q.name()),
                record_type: RecordTypeMapper::from_hickory(q.query_type()),
                class: u16::from(q.query_class()),
            })
            .collect();

        Ok(DecodedQuery {
            header: QueryHeader {
                id: message.id(),
                recursion_desired: message.recursion_desired(),
            },
            questions,
        })
    }

    fn encode(&self, response: &ResponseMessage) -> Result<Vec<u8>, DomainError> {
        let header = &response.header;

        let mut message = Message::new();
        message
            .set_id(header.id)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_authoritative(header.authoritative)
            .set_truncated(header.truncated)
            .set_recursion_desired(header.recursion_desired)
            .set_recursion_available(header.recursion_available)
            .set_response_code(Self::to_hickory_rcode(header.response_code));

        for question in &response.questions {
            message.add_query(Self::to_hickory_query(question).map_err(encoding_failure)?);
        }
        for record in &response.answers {
            message.add_answer(to_hickory_record(record).map_err(encoding_failure)?);
        }
        for record in &response.authorities {
            message.add_name_server(to_hickory_record(record).map_err(encoding_failure)?);
        }

        message
            .to_vec()
            .map_err(|e| DomainError::EncodingFailure(e.to_string()))
    }
}

// Names reaching the encoder were accepted earlier, so a name the wire format
// cannot carry is an encoding failure at this point.
fn encoding_failure(error: DomainError) -> DomainError {
    match error {
        DomainError::InvalidDomainName(msg) => DomainError::EncodingFailure(msg),
        other => other,
    }
}
