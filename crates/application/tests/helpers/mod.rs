#![allow(dead_code)]

mod mock_codec;

pub use mock_codec::MockMessageCodec;

use sslip_dns_application::use_cases::{BuildResponseUseCase, QuestionResolver};
use sslip_dns_domain::{StaticRecordStore, ZoneConfig};
use std::sync::Arc;

pub fn default_store() -> Arc<StaticRecordStore> {
    Arc::new(StaticRecordStore::from_config(&ZoneConfig::default()).unwrap())
}

pub fn default_resolver() -> Arc<QuestionResolver> {
    Arc::new(QuestionResolver::new(default_store()))
}

pub fn make_use_case(codec: Arc<MockMessageCodec>) -> BuildResponseUseCase {
    BuildResponseUseCase::new(default_resolver(), codec)
}
