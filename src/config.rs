use std::{env, str::FromStr, time::Duration};

pub const DEFAULT_BOOKING_RELAY: &str = "https://formspree.io/f/maqqekka";
pub const DEFAULT_CONTACT_RELAY: &str = "https://formspree.io/f/xykkevva";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CAROUSEL_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub port: u16,
    pub booking_relay_url: String,
    pub contact_relay_url: String,
    pub store_url: String,
    pub store_key: String,
    pub static_dir: String,
    pub carousel_interval: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            booking_relay_url: DEFAULT_BOOKING_RELAY.to_string(),
            contact_relay_url: DEFAULT_CONTACT_RELAY.to_string(),
            store_url: String::new(),
            store_key: String::new(),
            static_dir: "./static".to_string(),
            carousel_interval: Duration::from_secs(DEFAULT_CAROUSEL_SECS),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Bad numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        let interval_secs = parsed(&lookup, "CAROUSEL_INTERVAL_SECS", DEFAULT_CAROUSEL_SECS)
            .max(1);

        Self {
            bind_addr: text("BIND_ADDR", defaults.bind_addr),
            port: parsed(&lookup, "PORT", DEFAULT_PORT),
            booking_relay_url: text("BOOKING_RELAY_URL", defaults.booking_relay_url),
            contact_relay_url: text("CONTACT_RELAY_URL", defaults.contact_relay_url),
            store_url: text("TESTIMONIAL_STORE_URL", defaults.store_url),
            store_key: text("TESTIMONIAL_STORE_KEY", defaults.store_key),
            static_dir: text("STATIC_DIR", defaults.static_dir),
            carousel_interval: Duration::from_secs(interval_secs),
        }
    }

    pub fn store_enabled(&self) -> bool {
        !(self.store_url.trim().is_empty() || self.store_key.trim().is_empty())
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parsed<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, fallback: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{key}={raw:?} is not valid; using the default");
            fallback
        }),
        None => fallback,
    }
}
