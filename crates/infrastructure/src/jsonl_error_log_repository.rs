//! File-backed error-log partitions.
//!
//! Layout: `<directory>/<YYYY-MM-DD>.jsonl`, one JSON object per line,
//! append-only. Each partition has its own async mutex so appends to the same
//! date never interleave while different dates proceed in parallel.

use std::collections::HashMap;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use gateview_application::{AppendReceipt, ErrorLogRepository};
use gateview_core::{AppError, AppResult};
use gateview_domain::{ErrorEvent, LogLimit, PartitionDate};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::warn;

const PARTITION_EXTENSION: &str = "jsonl";

const READ_CHUNK_BYTES: u64 = 64 * 1024;

/// JSON Lines error-log repository rooted at one directory.
#[derive(Debug)]
pub struct JsonlErrorLogRepository {
    directory: PathBuf,
    partition_locks: Mutex<HashMap<PartitionDate, Arc<Mutex<()>>>>,
}

impl JsonlErrorLogRepository {
    /// Creates a repository writing partitions under `directory`.
    ///
    /// The directory is created lazily on first append.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            partition_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the partition directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        self.directory.as_path()
    }

    /// Returns the file name backing `partition`.
    #[must_use]
    pub fn partition_file_name(partition: PartitionDate) -> String {
        format!("{partition}.{PARTITION_EXTENSION}")
    }

    async fn partition_lock(&self, partition: PartitionDate) -> Arc<Mutex<()>> {
        self.partition_locks
            .lock()
            .await
            .entry(partition)
            .or_default()
            .clone()
    }

    /// Drops the lock entry for `partition` once no other append holds or
    /// awaits it.
    async fn release_partition_lock(&self, partition: PartitionDate, lock: Arc<Mutex<()>>) {
        let mut locks = self.partition_locks.lock().await;
        let idle = locks
            .get(&partition)
            .is_some_and(|entry| Arc::ptr_eq(entry, &lock) && Arc::strong_count(entry) == 2);
        if idle {
            locks.remove(&partition);
        }
    }

    /// Appends one encoded record. Callers hold the partition lock.
    async fn write_record(&self, path: &Path, mut record: Vec<u8>) -> AppResult<()> {
        fs::create_dir_all(&self.directory)
            .await
            .map_err(|error| storage_error("create log directory", &self.directory, error))?;

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)
            .await
            .map_err(|error| storage_error("open partition", path, error))?;

        // A crash mid-append can leave a torn tail; start on a fresh line so
        // the new record stays parseable.
        if ends_without_newline(&mut file)
            .await
            .map_err(|error| storage_error("inspect partition", path, error))?
        {
            record.insert(0, b'\n');
        }

        file.write_all(&record)
            .await
            .map_err(|error| storage_error("append to partition", path, error))?;
        file.sync_data()
            .await
            .map_err(|error| storage_error("sync partition", path, error))
    }

    /// Lists existing partitions, newest date first.
    async fn list_partitions(&self) -> AppResult<Vec<(PartitionDate, PathBuf)>> {
        let mut entries = match fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(storage_error("read log directory", &self.directory, error)),
        };

        let mut partitions = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|error| storage_error("read log directory", &self.directory, error))?
        {
            let path = entry.path();
            let Some(partition) = partition_from_path(&path) else {
                continue;
            };

            let is_file = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);
            if is_file {
                partitions.push((partition, path));
            }
        }

        partitions.sort_by(|left, right| right.0.cmp(&left.0));
        Ok(partitions)
    }
}

#[async_trait]
impl ErrorLogRepository for JsonlErrorLogRepository {
    async fn append(
        &self,
        partition: PartitionDate,
        event: &ErrorEvent,
    ) -> AppResult<AppendReceipt> {
        let mut record = serde_json::to_vec(event)
            .map_err(|error| AppError::Internal(format!("failed to encode error event: {error}")))?;
        record.push(b'\n');

        let location = Self::partition_file_name(partition);
        let path = self.directory.join(&location);

        let lock = self.partition_lock(partition).await;
        let written = {
            let _guard = lock.lock().await;
            self.write_record(&path, record).await
        };
        self.release_partition_lock(partition, lock).await;
        written?;

        Ok(AppendReceipt {
            partition,
            location,
        })
    }

    async fn latest(&self, limit: LogLimit) -> AppResult<Vec<ErrorEvent>> {
        let mut events = Vec::new();

        for (partition, path) in self.list_partitions().await? {
            read_partition_tail_first(partition, &path, limit.get(), &mut events).await?;
            if events.len() >= limit.get() {
                break;
            }
        }

        Ok(events)
    }
}

/// Pushes records of one partition onto `events`, newest first, until
/// `events` holds `limit` records.
///
/// The file is read backwards in fixed-size chunks so memory stays bounded by
/// the chunk size plus the longest record, independent of partition size.
async fn read_partition_tail_first(
    partition: PartitionDate,
    path: &Path,
    limit: usize,
    events: &mut Vec<ErrorEvent>,
) -> AppResult<()> {
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(()),
        Err(error) => return Err(storage_error("open partition", path, error)),
    };
    let mut position = file
        .metadata()
        .await
        .map_err(|error| storage_error("inspect partition", path, error))?
        .len();

    // Bytes starting at file offset `position` that precede the first
    // newline seen so far: the unfinished start of a line.
    let mut pending: Vec<u8> = Vec::new();

    while position > 0 {
        let start = position.saturating_sub(READ_CHUNK_BYTES);
        let chunk_len = usize::try_from(position - start)
            .map_err(|_| AppError::Internal("read chunk exceeds address space".to_owned()))?;
        let mut chunk = vec![0u8; chunk_len];
        file.seek(SeekFrom::Start(start))
            .await
            .map_err(|error| storage_error("seek partition", path, error))?;
        file.read_exact(&mut chunk)
            .await
            .map_err(|error| storage_error("read partition", path, error))?;
        position = start;

        chunk.extend_from_slice(&pending);
        pending = chunk;

        while let Some(newline) = pending.iter().rposition(|byte| *byte == b'\n') {
            let line = pending.split_off(newline + 1);
            pending.truncate(newline);
            let offset = position + newline as u64 + 1;
            if push_record(partition, offset, &line, limit, events) {
                return Ok(());
            }
        }
    }

    push_record(partition, 0, &pending, limit, events);
    Ok(())
}

/// Decodes one line onto `events`. Returns whether `limit` is reached.
fn push_record(
    partition: PartitionDate,
    offset: u64,
    line: &[u8],
    limit: usize,
    events: &mut Vec<ErrorEvent>,
) -> bool {
    if line.iter().all(u8::is_ascii_whitespace) {
        return false;
    }

    match serde_json::from_slice::<ErrorEvent>(line) {
        Ok(event) => events.push(event),
        Err(error) => warn!(
            partition = %partition,
            offset,
            error = %error,
            "skipping malformed error log record"
        ),
    }

    events.len() >= limit
}

fn partition_from_path(path: &Path) -> Option<PartitionDate> {
    if path.extension().and_then(|extension| extension.to_str()) != Some(PARTITION_EXTENSION) {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    let partition = stem.parse::<PartitionDate>().ok()?;
    (partition.to_string() == stem).then_some(partition)
}

async fn ends_without_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata().await?.len() == 0 {
        return Ok(false);
    }

    file.seek(SeekFrom::End(-1)).await?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last).await?;
    Ok(last[0] != b'\n')
}

fn storage_error(action: &str, path: &Path, error: std::io::Error) -> AppError {
    AppError::Storage(format!("failed to {action} '{}': {error}", path.display()))
}

#[cfg(test)]
mod tests;
