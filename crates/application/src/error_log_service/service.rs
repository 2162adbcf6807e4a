use std::sync::Arc;

use gateview_core::AppResult;
use gateview_domain::{ErrorEvent, LogLimit};
use tracing::info;

use super::ports::{AppendReceipt, ErrorLogRepository};

/// Read limits applied by [`ErrorLogService::latest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLogSettings {
    /// Limit used when the caller does not request one.
    pub default_limit: usize,
    /// Requests above this are clamped.
    pub max_limit: usize,
}

impl Default for ErrorLogSettings {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 1000,
        }
    }
}

/// Application service for error-log ingestion and retrieval.
#[derive(Clone)]
pub struct ErrorLogService {
    repository: Arc<dyn ErrorLogRepository>,
    settings: ErrorLogSettings,
}

impl ErrorLogService {
    /// Creates a new error-log service.
    #[must_use]
    pub fn new(repository: Arc<dyn ErrorLogRepository>, settings: ErrorLogSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Validates and appends one event to its date partition.
    ///
    /// An unparseable timestamp fails with `AppError::Validation` before
    /// anything is written. Storage failures are returned as-is and not
    /// retried.
    pub async fn record(&self, event: ErrorEvent) -> AppResult<AppendReceipt> {
        let partition = event.partition_date()?;
        let receipt = self.repository.append(partition, &event).await?;

        info!(
            partition = %receipt.partition,
            stream_id = %event.stream_id,
            error_type = %event.error_type,
            "error event recorded"
        );

        Ok(receipt)
    }

    /// Returns the most recently appended events.
    ///
    /// `requested` of `None` uses the configured default; zero is rejected.
    pub async fn latest(&self, requested: Option<usize>) -> AppResult<Vec<ErrorEvent>> {
        let limit = LogLimit::new(
            requested.unwrap_or(self.settings.default_limit),
            self.settings.max_limit,
        )?;

        self.repository.latest(limit).await
    }
}
