//! Error type shared by the user, product and order repository ports.

use super::define_port_error;

define_port_error! {
    /// Failures raised by repository adapters.
    ///
    /// `NotFound` and `InvalidIdentifier` are caller errors; the remaining
    /// variants are storage faults and carry no further classification.
    pub enum RepositoryError {
        /// No document matched the lookup key.
        NotFound { entity: String, key: String } => "{entity} not found: {key}",
        /// The key is not a well-formed document identifier.
        InvalidIdentifier { id: String } => "invalid document identifier: {id}",
        /// The document store could not be reached.
        Connection { message: String } => "document store connection failed: {message}",
        /// The operation reached the store but failed.
        Query { message: String } => "document store query failed: {message}",
        /// The operation did not finish within the configured deadline.
        Timeout { millis: u64 } => "document store operation timed out after {millis}ms",
    }
}

impl RepositoryError {
    /// Whether the error reports a missing document.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
