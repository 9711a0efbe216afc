//! Shared MongoDB handle and operation deadline.
//!
//! The driver pools connections internally, so a single [`MongoStore`] is
//! built at startup and cloned into every repository.

use std::future::IntoFuture;
use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::ports::RepositoryError;

const APP_NAME: &str = "storefront";

/// Errors raised while building the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string could not be parsed.
    #[error("invalid document store uri: {message}")]
    InvalidUri { message: String },

    /// The server did not answer the startup ping.
    #[error("document store unreachable: {message}")]
    Unreachable { message: String },
}

impl StoreError {
    /// Create an invalid-uri error with the given message.
    pub fn invalid_uri(message: impl Into<String>) -> Self {
        Self::InvalidUri {
            message: message.into(),
        }
    }

    /// Create an unreachable error with the given message.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }
}

/// Connection settings for the document store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use storefront::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://127.0.0.1:27017", "nvsu_db")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.database(), "nvsu_db");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database: String,
    timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration with a 10 second operation timeout.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Bound connection, server selection and every repository operation.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Connection string.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Operation deadline.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Database handle shared by the MongoDB repositories.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    timeout: Duration,
}

impl MongoStore {
    /// Build the client and ping the server once.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUri`] when the connection string is
    /// rejected and [`StoreError::Unreachable`] when the ping fails.
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| StoreError::invalid_uri(err.to_string()))?;
        options.app_name = Some(APP_NAME.to_owned());
        options.connect_timeout = Some(config.timeout());
        options.server_selection_timeout = Some(config.timeout());

        let client =
            Client::with_options(options).map_err(|err| StoreError::invalid_uri(err.to_string()))?;
        let store = Self {
            database: client.database(config.database()),
            timeout: config.timeout(),
        };

        store
            .database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreError::unreachable(err.to_string()))?;
        Ok(store)
    }

    /// Name of the database the store is bound to.
    #[must_use]
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    pub(super) fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        self.database.collection(name)
    }

    /// Run one driver operation under the store deadline.
    pub(super) async fn bounded<T, F>(&self, operation: F) -> Result<T, RepositoryError>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        with_deadline(self.timeout, operation).await
    }
}

pub(super) async fn with_deadline<T, F>(
    deadline: Duration,
    operation: F,
) -> Result<T, RepositoryError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result.map_err(map_driver_error),
        Err(_) => {
            debug!(?deadline, "document store operation timed out");
            Err(RepositoryError::timeout(
                u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
            ))
        }
    }
}

/// Classify driver failures. Details stay in the logs.
pub(super) fn map_driver_error(error: mongodb::error::Error) -> RepositoryError {
    use mongodb::error::ErrorKind;

    debug!(error = %error, "document store operation failed");
    match error.kind.as_ref() {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => RepositoryError::connection("document store unavailable"),
        _ => RepositoryError::query("document store error"),
    }
}
