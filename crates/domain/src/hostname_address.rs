//! Addresses embedded in host names.
//!
//! A label like `127-0-0-1` or `2001-db8--1` spells an address with `-`
//! standing in for `.` or `:` (`:` is not legal in a DNS label, and `--`
//! stands for `::`). Dotted forms such as `127.0.0.1.sslip.io` work for IPv4
//! as well.
//!
//! A literal must start at the beginning of the name or right after a `.`/`-`
//! and end at the end of the name or right before one. The leftmost starting
//! position wins; among literals starting there, the longest one wins. The
//! winning literal is converted and parsed, and a literal that the standard
//! parser rejects yields no address rather than trying further candidates.

use crate::domain_name::MAX_LABEL_LEN;
use fancy_regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

/// Every literal fits in one label. The hex forms are at most 39 bytes and the
/// dotted forms at most 36; the zone index cannot contain `.`, so the
/// link-local form is bounded by the label it sits in.
const MAX_LITERAL_LEN: usize = MAX_LABEL_LEN;

const OCTET: &str = r"(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])";
const HEXTET: &str = r"[0-9a-fA-F]{1,4}";

static IPV4_LITERAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:{o}[.-]){{3}}{o}$", o = OCTET)).ok()
});

static IPV6_LITERAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let h = HEXTET;
    let dotted = format!(r"(?:{o}\.){{3}}{o}", o = OCTET);
    let forms = [
        format!(r"(?:{h}-){{7}}{h}"),
        format!(r"(?:{h}-){{1,7}}-"),
        format!(r"(?:{h}-){{1,6}}-{h}"),
        format!(r"(?:{h}-){{1,5}}(?:-{h}){{1,2}}"),
        format!(r"(?:{h}-){{1,4}}(?:-{h}){{1,3}}"),
        format!(r"(?:{h}-){{1,3}}(?:-{h}){{1,4}}"),
        format!(r"(?:{h}-){{1,2}}(?:-{h}){{1,5}}"),
        format!(r"{h}-(?:-{h}){{1,6}}"),
        format!(r"-(?:(?:-{h}){{1,7}}|-)"),
        // link-local with zone index
        r"fe80-(?:-[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]{1,57}".to_string(),
        // IPv4-mapped and IPv4-translated
        format!(r"--(?:ffff(?:-0{{1,4}})?-)?{dotted}"),
        // IPv4-embedded
        format!(r"(?:{h}-){{1,4}}-{dotted}"),
    ];
    Regex::new(&format!("^(?:{})$", forms.join("|"))).ok()
});

/// Returns the IPv4 address embedded in `name`, if any.
pub fn extract_ipv4(name: &str) -> Option<Ipv4Addr> {
    let literal = find_literal(name, IPV4_LITERAL.as_ref()?)?;
    literal.replace('-', ".").parse().ok()
}

/// Returns the IPv6 address embedded in `name`, if any. A zone index is
/// accepted in the name but not part of the returned address.
pub fn extract_ipv6(name: &str) -> Option<Ipv6Addr> {
    let literal = find_literal(name, IPV6_LITERAL.as_ref()?)?;
    let literal = literal.replace('-', ":");
    let address = literal.split('%').next().unwrap_or_default();
    address.parse().ok()
}

#[inline]
fn is_separator(byte: u8) -> bool {
    byte == b'.' || byte == b'-'
}

/// Finds the leftmost, then longest, substring of `name` that sits between
/// separators (or the ends of the name) and fully matches `literal`.
fn find_literal<'a>(name: &'a str, literal: &Regex) -> Option<&'a str> {
    let bytes = name.as_bytes();
    let starts = std::iter::once(0).chain(
        bytes
            .iter()
            .enumerate()
            .filter(|(_, b)| is_separator(**b))
            .map(|(i, _)| i + 1),
    );

    for start in starts {
        let window_end = bytes.len().min(start + MAX_LITERAL_LEN);
        let ends = (start + 1..=window_end)
            .rev()
            .filter(|&end| end == bytes.len() || is_separator(bytes[end]));

        for end in ends {
            // start and end both sit next to ASCII separators or at the
            // ends of the string, so they are char boundaries.
            let candidate = &name[start..end];
            if matches!(literal.is_match(candidate), Ok(true)) {
                return Some(candidate);
            }
        }
    }

    None
}
