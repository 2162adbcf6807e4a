use std::collections::BTreeMap;

use async_trait::async_trait;
use gateview_application::{AppendReceipt, ErrorLogRepository};
use gateview_core::AppResult;
use gateview_domain::{ErrorEvent, LogLimit, PartitionDate};
use tokio::sync::RwLock;

/// In-memory error-log repository with the same ordering as the file store.
#[derive(Debug, Default)]
pub struct InMemoryErrorLogRepository {
    partitions: RwLock<BTreeMap<PartitionDate, Vec<ErrorEvent>>>,
}

impl InMemoryErrorLogRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records stored in `partition`.
    pub async fn partition_len(&self, partition: PartitionDate) -> usize {
        self.partitions
            .read()
            .await
            .get(&partition)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl ErrorLogRepository for InMemoryErrorLogRepository {
    async fn append(
        &self,
        partition: PartitionDate,
        event: &ErrorEvent,
    ) -> AppResult<AppendReceipt> {
        self.partitions
            .write()
            .await
            .entry(partition)
            .or_default()
            .push(event.clone());

        Ok(AppendReceipt {
            partition,
            location: partition.to_string(),
        })
    }

    async fn latest(&self, limit: LogLimit) -> AppResult<Vec<ErrorEvent>> {
        let partitions = self.partitions.read().await;

        Ok(partitions
            .values()
            .rev()
            .flat_map(|events| events.iter().rev())
            .take(limit.get())
            .cloned()
            .collect())
    }
}
