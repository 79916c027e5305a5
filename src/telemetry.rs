//! # Telemetry
//!
//! Tracing subscriber setup for the HRM API plus the per-request trace
//! context that stamps error responses with a correlation ID. Legacy `log::`
//! macros (the seeders use them) are bridged into the tracing pipeline.

use std::any::type_name_of_val;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;
use thiserror::Error;
use tokio::task_local;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::Layer,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};
use uuid::Uuid;

use crate::config::AppConfig;

/// Correlation ID shared by a request's log lines and its error response.
#[derive(Debug, Clone)]
pub struct TraceContext {
    pub trace_id: String,
}

impl TraceContext {
    /// Mint a context for an incoming API request.
    pub fn for_request() -> Self {
        Self {
            trace_id: format!("req-{}", &Uuid::new_v4().to_string()[..8]),
        }
    }
}

task_local! {
    static REQUEST_TRACE: TraceContext;
}

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] log::SetLoggerError),
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

static SUBSCRIBER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install the global tracing subscriber. Only the first call takes effect;
/// later calls return without touching the registry.
pub fn init_tracing(config: &AppConfig) -> Result<(), TelemetryInitError> {
    if SUBSCRIBER_INSTALLED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Ok(());
    }

    install_log_bridge();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Structured JSON unless the config asks for human-readable output.
    let fmt_layer = if config.log_format.eq_ignore_ascii_case("pretty") {
        fmt::layer().pretty().boxed()
    } else {
        fmt::layer().json().boxed()
    };

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        SUBSCRIBER_INSTALLED.store(false, Ordering::SeqCst);
        eprintln!("Warning: tracing subscriber was not installed ({err}); the existing subscriber stays in effect");
    }

    Ok(())
}

// A bridge registered elsewhere (usually another test in the same binary)
// counts as installed.
fn install_log_bridge() {
    if let Err(err) = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init()
    {
        if !type_name_of_val(log::logger()).contains("LogTracer") {
            eprintln!(
                "Warning: log bridge not installed ({err}); `log::` output will not reach tracing"
            );
        }
    }
}

/// Run `future` with `context` as the task-local trace context.
pub async fn with_trace_context<Fut, R>(context: TraceContext, future: Fut) -> R
where
    Fut: std::future::Future<Output = R>,
{
    REQUEST_TRACE.scope(context, future).await
}

/// Trace ID of the request the current task is serving, if any.
pub fn current_trace_id() -> Option<String> {
    REQUEST_TRACE.try_with(|ctx| ctx.trace_id.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trace_ids_carry_the_req_prefix() {
        let context = TraceContext::for_request();
        assert!(context.trace_id.starts_with("req-"));
        assert_eq!(context.trace_id.len(), 12);
    }

    #[tokio::test]
    async fn trace_id_is_only_visible_inside_its_scope() {
        assert_eq!(current_trace_id(), None);

        let context = TraceContext {
            trace_id: "req-feedc0de".to_string(),
        };
        let seen = with_trace_context(context, async { current_trace_id() }).await;
        assert_eq!(seen.as_deref(), Some("req-feedc0de"));

        assert_eq!(current_trace_id(), None);
    }
}
