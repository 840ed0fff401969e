//! Logging facilities for fluent-notify.
//!
//! The library is instrumented with the `tracing` crate. Install a
//! subscriber in the host application to see events:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Field reads/writes and fallback decisions.
    pub const FIELD: &str = "fluent_notify_core::field";
    /// Resource table resolution.
    pub const RESOURCE: &str = "fluent_notify_core::resource";
}
