use figment::{Figment, providers::Env};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

pub trait ContextProvider<Config> {
    fn new(config: Config) -> impl Future<Output = Self>;
}

/// Initialize the application context with configuration from environment
/// variables. Tracing is set up first so that configuration problems are
/// logged.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
pub async fn create_app_context<A, Config>() -> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
    Config: DeserializeOwned,
{
    init_tracing();

    let config: Config = load_config()?;

    Ok(A::new(config).await)
}

/// Installs the global `tracing` subscriber.
///
/// The log level is taken from `RUST_LOG` and defaults to `info`. Setting
/// `LOG_FORMAT=json` switches to one JSON object per line, which is what log
/// shippers expect.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var("LOG_FORMAT")
        .is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let result = if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            // this needs to be set to remove duplicated information in the log.
            .with_current_span(false)
            .with_ansi(false)
            .with_target(false)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if let Err(err) = result {
        tracing::debug!("tracing already initialized: {err}");
    }
}

/// Extracts `Config` from the process environment.
///
/// Variable names are matched case-insensitively against the field names,
/// so `PORT` fills `port`.
///
/// # Errors
/// If a required variable is missing or a value has the wrong type.
pub fn load_config<Config: DeserializeOwned>() -> Result<Config, figment::Error>
{
    Figment::new().merge(Env::raw()).extract()
}
