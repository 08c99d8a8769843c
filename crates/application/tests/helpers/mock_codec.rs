use sslip_dns_application::ports::MessageCodec;
use sslip_dns_domain::{DecodedQuery, DomainError, QueryHeader, Question, ResponseMessage};
use std::sync::Mutex;

/// Hands out a fixed decoded query and records every response it is asked to
/// encode. The encoded bytes are just the response id.
pub struct MockMessageCodec {
    decoded: Mutex<Option<DecodedQuery>>,
    encode_error: Mutex<Option<DomainError>>,
    encoded: Mutex<Vec<ResponseMessage>>,
}

impl MockMessageCodec {
    pub fn new() -> Self {
        Self {
            decoded: Mutex::new(None),
            encode_error: Mutex::new(None),
            encoded: Mutex::new(Vec::new()),
        }
    }

    pub fn with_questions(id: u16, recursion_desired: bool, questions: Vec<Question>) -> Self {
        let codec = Self::new();
        codec.set_query(DecodedQuery {
            header: QueryHeader {
                id,
                recursion_desired,
            },
            questions,
        });
        codec
    }

    pub fn set_query(&self, query: DecodedQuery) {
        *self.decoded.lock().unwrap() = Some(query);
    }

    pub fn set_encode_error(&self, error: DomainError) {
        *self.encode_error.lock().unwrap() = Some(error);
    }

    pub fn encoded(&self) -> Vec<ResponseMessage> {
        self.encoded.lock().unwrap().clone()
    }

    pub fn last_encoded(&self) -> ResponseMessage {
        self.encoded
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("nothing was encoded")
    }
}

impl MessageCodec for MockMessageCodec {
    fn decode(&self, _query: &[u8]) -> Result<DecodedQuery, DomainError> {
        self.decoded
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::MalformedInput("no query configured".to_string()))
    }

    fn encode(&self, response: &ResponseMessage) -> Result<Vec<u8>, DomainError> {
        if let Some(error) = self.encode_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.encoded.lock().unwrap().push(response.clone());
        Ok(response.header.id.to_be_bytes().to_vec())
    }
}
