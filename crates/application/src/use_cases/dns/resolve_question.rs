use sslip_dns_domain::hostname_address::{extract_ipv4, extract_ipv6};
use sslip_dns_domain::{
    DnsRecord, DomainError, DomainName, Question, RecordData, RecordType, ResolutionOutcome, ResponseCode,
    StaticRecordStore,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::debug;

/// Decides the records for a single question.
///
/// A/AAAA consult the fixed tables first and fall back to the address spelled
/// in the name; when nothing is found the queried name gets an SOA for the
/// authority section so resolvers can cache the absence. ANY is refused with
/// NOTIMP rather than aggregated.
pub struct QuestionResolver {
    store: Arc<StaticRecordStore>,
}

impl QuestionResolver {
    pub fn new(store: Arc<StaticRecordStore>) -> Self {
        Self { store }
    }

    pub fn resolve(&self, question: &Question) -> Result<ResolutionOutcome, DomainError> {
        let name = &question.name;

        let outcome = match question.record_type {
            RecordType::A => match self.resolve_ipv4(name) {
                Some(ip) => ResolutionOutcome::Answer(vec![DnsRecord::new(
                    name.clone(),
                    RecordData::A(ip),
                )]),
                None => ResolutionOutcome::NoAnswer(self.store.soa(name)),
            },
            RecordType::AAAA => match self.resolve_ipv6(name) {
                Some(ip) => ResolutionOutcome::Answer(vec![DnsRecord::new(
                    name.clone(),
                    RecordData::Aaaa(ip),
                )]),
                None => ResolutionOutcome::NoAnswer(self.store.soa(name)),
            },
            RecordType::NS => ResolutionOutcome::Answer(
                self.store
                    .nameservers()
                    .iter()
                    .map(|(ns, _)| DnsRecord::new(name.clone(), RecordData::Ns(ns.clone())))
                    .collect(),
            ),
            RecordType::MX => ResolutionOutcome::Answer(vec![DnsRecord::new(
                name.clone(),
                RecordData::Mx {
                    preference: 0,
                    exchange: self.store.mail_exchange().clone(),
                },
            )]),
            RecordType::SOA => ResolutionOutcome::Answer(vec![self.store.soa(name)]),
            RecordType::ANY => {
                debug!(domain = %name, "Refusing ANY query");
                return Err(DomainError::UnsupportedQueryType {
                    record_type: question.record_type,
                    rcode: ResponseCode::NotImp,
                });
            }
            _ => ResolutionOutcome::NoAnswer(self.store.soa(name)),
        };

        debug!(
            domain = %name,
            record_type = %question.record_type,
            answer = outcome.is_answer(),
            "Question resolved"
        );

        Ok(outcome)
    }

    fn resolve_ipv4(&self, name: &DomainName) -> Option<Ipv4Addr> {
        if let Some(host) = self.store.lookup_override(name) {
            return Some(host.ipv4);
        }
        self.store
            .lookup_nameserver(name)
            .or_else(|| extract_ipv4(&name.to_string()))
    }

    fn resolve_ipv6(&self, name: &DomainName) -> Option<Ipv6Addr> {
        if let Some(host) = self.store.lookup_override(name) {
            return Some(host.ipv6);
        }
        extract_ipv6(&name.to_string())
    }
}
