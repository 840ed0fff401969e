//! Error types for the field framework.

use crate::resource::SemanticKind;

/// Result type alias for field and resource operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or reading builder fields.
///
/// All three variants signal a construction-time mistake, not a runtime
/// input error. They are never caught or retried inside the library and
/// propagate synchronously out of the build entry point, so no partially
/// assembled object is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `Required` field was read with no direct value and no resolvable
    /// fallback resource.
    #[error("required field '{owner}.{name}' was never set and no fallback resource resolved")]
    RequiredNotSet {
        /// Type name of the builder owning the field.
        owner: &'static str,
        /// Name of the field.
        name: &'static str,
    },

    /// A `Once` field received a second write attempt.
    #[error("field '{owner}.{name}' has already been set and cannot be set again")]
    AlreadySet {
        /// Type name of the builder owning the field.
        owner: &'static str,
        /// Name of the field.
        name: &'static str,
    },

    /// The resolver was asked for a semantic kind it does not implement.
    /// This signals a framework gap, not caller misuse.
    #[error("no resolver registered for resource kind '{kind}'")]
    UnsupportedResourceType {
        /// The kind that has no resolver.
        kind: SemanticKind,
    },
}
