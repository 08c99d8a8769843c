pub mod record;
pub mod record_type;

pub use record::{DnsRecord, RecordData, SoaData, RECORD_TTL};
pub use record_type::RecordType;

/// What a single question resolved to. An answer and an authority record are
/// never produced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Answer(Vec<DnsRecord>),
    NoAnswer(DnsRecord),
}

impl ResolutionOutcome {
    pub fn is_answer(&self) -> bool {
        matches!(self, ResolutionOutcome::Answer(_))
    }

    /// Short description used in the transaction log.
    pub fn summary(&self) -> String {
        match self {
            ResolutionOutcome::Answer(records) => records
                .first()
                .map(|record| record.data.to_string())
                .unwrap_or_default(),
            ResolutionOutcome::NoAnswer(_) => "nil, SOA".to_string(),
        }
    }
}
