//! sslip-dns Infrastructure Layer
pub mod dns;
