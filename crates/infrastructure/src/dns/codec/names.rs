//! Name conversion between hickory names and domain names.
//!
//! Labels are copied as raw bytes in both directions, so a question name is
//! written back exactly as it was read. Going through text would split labels
//! that contain `.` and inflate non-UTF-8 labels past the label limit, and
//! `Name::from_ascii`/`to_ascii` would escape labels that start with `-`.

use hickory_proto::rr::Name;
use sslip_dns_domain::{DomainError, DomainName};

pub fn from_hickory_name(name: &Name) -> DomainName {
    DomainName::from_labels(name.iter())
}

/// Builds a fully qualified hickory name from the labels of `name`.
pub fn to_hickory_name(name: &DomainName) -> Result<Name, DomainError> {
    if name.is_root() {
        return Ok(Name::root());
    }

    let mut converted = Name::from_labels(name.labels())
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid name '{}': {}", name, e)))?;
    converted.set_fqdn(true);
    Ok(converted)
}
