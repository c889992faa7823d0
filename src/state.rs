use crate::{config::SiteConfig, feed::FeedCache, relay::RelayClient, store::TestimonialStore};

/// Everything a request handler needs. Built once at startup and shared
/// through `web::Data`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: SiteConfig,
    pub booking_relay: RelayClient,
    pub contact_relay: RelayClient,
    pub store: TestimonialStore,
    pub feeds: FeedCache,
}

impl AppState {
    pub fn new(config: SiteConfig, http: reqwest::Client) -> Self {
        Self {
            booking_relay: RelayClient::new(http.clone(), config.booking_relay_url.clone()),
            contact_relay: RelayClient::new(http.clone(), config.contact_relay_url.clone()),
            store: TestimonialStore::new(http, &config.store_url, &config.store_key),
            feeds: FeedCache::new(),
            config,
        }
    }
}
