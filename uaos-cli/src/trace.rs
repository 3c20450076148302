use tracing_subscriber::{
    EnvFilter, filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uaos::error::{BoxError, ErrorContext as _};

/// Install a stderr [`fmt`] subscriber, filtered by `RUST_LOG`
/// and falling back to the given directive.
pub fn init_tracing(default_directive: impl Into<Directive>) -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_directive.into())
                .from_env_lossy(),
        )
        .try_init()
        .context("try init tracing subscriber")?;

    Ok(())
}
