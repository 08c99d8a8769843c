//! Mapping between `sslip_dns_domain::RecordType` and `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use sslip_dns_domain::RecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Every wire value maps to something; types without a domain variant
    /// come back as `RecordType::Unknown`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_known_types() {
        let types = [
            RecordType::A,
            RecordType::NS,
            RecordType::CNAME,
            RecordType::SOA,
            RecordType::PTR,
            RecordType::MX,
            RecordType::TXT,
            RecordType::AAAA,
            RecordType::SRV,
            RecordType::HTTPS,
            RecordType::CAA,
            RecordType::ANY,
        ];

        for rt in types {
            let hickory = RecordTypeMapper::to_hickory(rt);
            assert_eq!(
                RecordTypeMapper::from_hickory(hickory),
                rt,
                "Roundtrip failed for {:?} → {:?}",
                rt,
                hickory
            );
        }
    }

    #[test]
    fn test_any_mapping() {
        assert_eq!(
            RecordTypeMapper::to_hickory(RecordType::ANY),
            HickoryRecordType::ANY
        );
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::ANY),
            RecordType::ANY
        );
    }

    #[test]
    fn test_unlisted_type_is_unknown() {
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::NAPTR),
            RecordType::Unknown(35)
        );
    }
}
