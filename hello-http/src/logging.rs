//! Log output for the function binary
//!
//! Lambda stamps every stdout line itself, so lines are written bare: no
//! timestamp, level, target or colour codes.
use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Builds the subscriber the binary installs, writing through `make_writer`.
pub fn subscriber<W>(filter: EnvFilter, make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: MakeWriter + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish()
}

/// Installs the subscriber on stdout. `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing::subscriber::set_global_default(subscriber(filter, std::io::stdout))?;
    Ok(())
}
