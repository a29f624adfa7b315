use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub environment: Option<String>,
    pub database_url: String,
    pub port: Option<u16>,
    pub page_size: Option<u32>,
    pub index_cache_ttl_secs: Option<u64>,
}

impl Settings {
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(10)
    }

    pub fn index_cache_ttl_secs(&self) -> u64 {
        self.index_cache_ttl_secs.unwrap_or(20)
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let settings = Config::builder();
    let settings = settings.add_source(Environment::default());
    settings.build()?.try_deserialize()
}
