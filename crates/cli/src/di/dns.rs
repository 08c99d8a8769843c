use sslip_dns_application::use_cases::{BuildResponseUseCase, QuestionResolver};
use sslip_dns_domain::{Config, StaticRecordStore};
use sslip_dns_infrastructure::dns::HickoryCodec;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub build_response: Arc<BuildResponseUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let store = Arc::new(StaticRecordStore::from_config(&config.zone)?);

        info!(
            web_hosts = config.zone.web_hosts.len(),
            nameservers = store.nameservers().len(),
            mx = %store.mail_exchange(),
            hostmaster = %store.hostmaster(),
            "Static records loaded"
        );

        let resolver = Arc::new(QuestionResolver::new(store));
        let build_response = Arc::new(BuildResponseUseCase::new(
            resolver,
            Arc::new(HickoryCodec::new()),
        ));

        Ok(Self { build_response })
    }
}
