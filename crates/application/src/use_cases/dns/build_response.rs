use super::QuestionResolver;
use crate::ports::MessageCodec;
use sslip_dns_domain::{
    DomainError, Question, ResolutionOutcome, ResponseCode, ResponseHeader, ResponseMessage,
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// One `<type> <name> ? <result>` entry per question, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionLog {
    entries: Vec<String>,
}

impl TransactionLog {
    pub fn push(&mut self, question: &Question, result: &str) {
        self.entries.push(format!(
            "{} {} ? {}",
            question.record_type, question.name, result
        ));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Prefixes the log with caller context such as the client endpoint.
    pub fn with_context(&self, context: &str) -> String {
        format!("{}: {}", context, self)
    }
}

impl fmt::Display for TransactionLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("; "))
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub response: Vec<u8>,
    pub response_code: ResponseCode,
    pub log: TransactionLog,
}

/// Turns a raw query into a raw response.
///
/// Every question is resolved before anything is built, so the response code
/// is decided once and exactly one message is encoded. Undecodable input is
/// returned as an error for the caller to drop.
pub struct BuildResponseUseCase {
    resolver: Arc<QuestionResolver>,
    codec: Arc<dyn MessageCodec>,
}

impl BuildResponseUseCase {
    pub fn new(resolver: Arc<QuestionResolver>, codec: Arc<dyn MessageCodec>) -> Self {
        Self { resolver, codec }
    }

    pub fn execute(&self, query: &[u8]) -> Result<Transaction, DomainError> {
        let decoded = self.codec.decode(query)?;

        let mut answers = Vec::new();
        let mut authorities = Vec::new();
        let mut log = TransactionLog::default();
        let mut response_code = ResponseCode::NoError;
        let mut consumed = 0;

        for question in &decoded.questions {
            consumed += 1;
            match self.resolver.resolve(question) {
                Ok(outcome) => {
                    log.push(question, &outcome.summary());
                    match outcome {
                        ResolutionOutcome::Answer(records) => answers.extend(records),
                        ResolutionOutcome::NoAnswer(soa) => authorities.push(soa),
                    }
                }
                Err(DomainError::UnsupportedQueryType { rcode, .. }) => {
                    log.push(question, rcode.as_str());
                    response_code = rcode;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        if response_code != ResponseCode::NoError {
            answers.clear();
            authorities.clear();
        }

        // Questions after the one that stopped resolution are not echoed.
        let mut questions = decoded.questions;
        questions.truncate(consumed);

        let response = ResponseMessage {
            header: ResponseHeader::for_query(&decoded.header, response_code),
            questions,
            answers,
            authorities,
        };

        let bytes = self.codec.encode(&response)?;

        debug!(
            id = response.header.id,
            questions = response.questions.len(),
            answers = response.answers.len(),
            authorities = response.authorities.len(),
            rcode = %response_code,
            "Response built"
        );

        Ok(Transaction {
            response: bytes,
            response_code,
            log,
        })
    }
}
