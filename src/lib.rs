//! Rehaplan — the generation core of an AI-assisted rehabilitation-planning
//! application.
//!
//! One public operation, [`pipeline::PlanGenerator::generate_plan`]:
//! validate an intake assessment, probe a bounded in-memory response cache,
//! prompt a local model under a fixed time budget, coerce/validate the
//! response field-by-field, and substitute deterministic templated content
//! for anything the model failed to produce. Callers always get a complete
//! plan; only malformed input is reported as an error.
//!
//! Identity and persistence are external collaborators: the pipeline takes
//! an opaque user id only when callers persist results through
//! [`store::ReportStore`], and never touches the store itself.

pub mod config;
pub mod models;
pub mod pipeline;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding this crate.
///
/// Honors `RUST_LOG` when set, otherwise uses the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);
}
