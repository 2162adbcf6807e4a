use async_trait::async_trait;
use gateview_core::AppResult;
use gateview_domain::{ErrorEvent, LogLimit, PartitionDate};

/// Repository port for partitioned error-log persistence.
///
/// Implementations must serialize appends to the same partition so that
/// concurrent records never interleave, and must never rewrite a committed
/// record.
#[async_trait]
pub trait ErrorLogRepository: Send + Sync {
    /// Appends one record as the new last record of `partition`, creating the
    /// partition on first write.
    async fn append(&self, partition: PartitionDate, event: &ErrorEvent)
    -> AppResult<AppendReceipt>;

    /// Returns at most `limit` records, most recently appended first.
    ///
    /// Records that cannot be decoded are skipped.
    async fn latest(&self, limit: LogLimit) -> AppResult<Vec<ErrorEvent>>;
}

/// Where an appended record landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendReceipt {
    /// Partition that received the record.
    pub partition: PartitionDate,
    /// Adapter-specific name of the partition resource. The file store
    /// reports the partition file name, the in-memory store the partition
    /// date. Callers may display it but must not parse it.
    pub location: String,
}
