/// Application-level constants
pub const APP_NAME: &str = "Rehaplan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How many generated plans the in-memory response cache retains
/// before FIFO eviction kicks in.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Time budget for a single model invocation (seconds). When the budget
/// elapses the orchestrator falls back to templated content.
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// Default model served by the local Ollama instance.
pub const DEFAULT_MODEL: &str = "medgemma:latest";

/// Default generation parameters, passed through to the model unchanged.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;
pub const DEFAULT_TOP_P: f32 = 0.95;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,rehaplan=debug".to_string()
}
