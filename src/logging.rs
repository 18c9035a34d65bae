use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, FmtSubscriber};

use crate::{
    error::{GameError, GameResult},
    formatter,
};

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Configure and initialize logging for the application.
///
/// `RUST_LOG` overrides `default_filter`. Only the first call has any effect.
pub fn setup_logging(default_filter: &str) -> GameResult<()> {
    let mut result = Ok(());
    SUBSCRIBER_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let subscriber = FmtSubscriber::builder()
            .with_target(true)
            .event_format(formatter::CustomFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        result = tracing::subscriber::set_global_default(subscriber).map_err(|e| GameError::Logging(e.to_string()));
    });
    result
}
