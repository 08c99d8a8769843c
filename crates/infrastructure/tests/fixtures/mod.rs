#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use sslip_dns_application::use_cases::{BuildResponseUseCase, QuestionResolver};
use sslip_dns_domain::{StaticRecordStore, ZoneConfig};
use sslip_dns_infrastructure::dns::HickoryCodec;
use std::sync::Arc;

/// Builds a query for `name` using raw labels, so names with a leading `-`
/// go on the wire untouched.
pub fn query_bytes(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    query_with_questions(id, true, &[(name, record_type)])
}

pub fn query_with_questions(
    id: u16,
    recursion_desired: bool,
    questions: &[(&str, RecordType)],
) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(recursion_desired);

    for (name, record_type) in questions {
        let mut query = Query::query(wire_name(name), *record_type);
        query.set_query_class(DNSClass::IN);
        message.add_query(query);
    }

    message.to_vec().unwrap()
}

/// Builds a single-question query from exact label bytes, for names that
/// have no dotted text spelling.
pub fn query_with_labels(id: u16, labels: &[&[u8]], record_type: RecordType) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);

    let name = Name::from_labels(labels.iter().copied()).unwrap();
    let mut query = Query::query(name, record_type);
    query.set_query_class(DNSClass::IN);
    message.add_query(query);

    message.to_vec().unwrap()
}

pub fn wire_name(name: &str) -> Name {
    let trimmed = name.trim_end_matches('.');
    if trimmed.is_empty() {
        return Name::root();
    }
    Name::from_labels(trimmed.split('.').map(str::as_bytes)).unwrap()
}

pub fn create_use_case() -> BuildResponseUseCase {
    let store = Arc::new(StaticRecordStore::from_config(&ZoneConfig::default()).unwrap());
    let resolver = Arc::new(QuestionResolver::new(store));
    BuildResponseUseCase::new(resolver, Arc::new(HickoryCodec::new()))
}

/// Runs a query through the full pipeline and parses the response.
pub fn exchange(query: &[u8]) -> Message {
    let transaction = create_use_case().execute(query).unwrap();
    Message::from_vec(&transaction.response).unwrap()
}

pub fn label_text(name: &Name) -> String {
    let labels: Vec<String> = name
        .iter()
        .map(|label| String::from_utf8_lossy(label).into_owned())
        .collect();
    format!("{}.", labels.join("."))
}
