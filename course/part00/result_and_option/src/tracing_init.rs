use tracing_subscriber::{
    filter::ParseError,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
    Registry,
};

/// Used when `RUST_LOG` is unset or unparseable: this crate at info, dependencies at warn.
pub const DEFAULT_FILTER: &str = "warn,result_and_option=info";

#[derive(thiserror::Error, Debug)]
pub enum TracingInitError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

pub fn filter() -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Events are written to stderr without targets,
/// leaving stdout to the matched lines.
pub fn init() -> Result<(), TracingInitError> {
    Registry::default()
        .with(filter()?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
