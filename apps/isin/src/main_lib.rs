use clap::Parser;
use openfigi::{CacheWritePolicy, ClientConfig, MappingRequest};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map an identifier (an ISIN by default) to OpenFIGI instrument records.
#[derive(Debug, Parser)]
#[command(name = "isin", version)]
pub struct Args {
    /// Identifier value to look up
    pub value: String,

    /// Limit results to this exchange code (e.g. US)
    #[arg(short = 'e', long = "exchange")]
    pub exchange: Option<String>,

    /// Identifier type code
    #[arg(long = "id-type", default_value = "ID_ISIN")]
    pub id_type: String,

    /// OpenFIGI API key (overrides OPENFIGI_API_KEY)
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Redis address for caching results (overrides OPENFIGI_REDIS_ADDR)
    #[arg(long = "redis")]
    pub redis: Option<String>,

    /// Return fetched records even if writing them to the cache fails
    #[arg(long = "best-effort-cache")]
    pub best_effort_cache: bool,
}

impl Args {
    /// Overlay command-line flags on the environment configuration.
    pub fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(redis) = &self.redis {
            config.redis_addr = Some(redis.clone());
        }
        if self.best_effort_cache {
            config.cache_write_policy = CacheWritePolicy::BestEffort;
        }
        config
    }

    pub fn request(&self) -> Result<MappingRequest, openfigi::FigiError> {
        let mut request = MappingRequest::new(&self.id_type, self.value.clone())?;
        if let Some(exchange) = &self.exchange {
            request = request.with_exchange(exchange.clone());
        }
        Ok(request)
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("OPENFIGI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
