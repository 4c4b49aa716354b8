//! Repository layer for the Hall of Fame: the capped, newest-first history
//! of session winners stored under [`HALL_OF_FAME_KEY`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{info, warn};
use ulid::Ulid;

use crate::domain::rules::HALL_OF_FAME_CAP;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::store::KeyValueStore;

/// Storage key, shared with earlier releases of the app.
pub const HALL_OF_FAME_KEY: &str = "HOF_RECORDS_V1";

/// One recorded winner. Serialized as
/// `{ "id", "name", "points", "dateISO" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameEntry {
    pub id: String,
    pub name: String,
    pub points: u32,
    #[serde(rename = "dateISO", with = "date_iso")]
    pub recorded_at: OffsetDateTime,
}

/// `dateISO` is written as `YYYY-MM-DDTHH:mm:ss.sssZ` (UTC, milliseconds),
/// the shape browsers produce. Any RFC 3339 timestamp is accepted on read.
mod date_iso {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};
    use time::format_description::well_known::Rfc3339;
    use time::macros::format_description;
    use time::{OffsetDateTime, UtcOffset};

    pub fn serialize<S>(at: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = at
            .to_offset(UtcOffset::UTC)
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
            ))
            .map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&raw, &Rfc3339).map_err(de::Error::custom)
    }
}

/// Hall of Fame over any [`KeyValueStore`].
///
/// Clones share the store and the write lock, so read-modify-write cycles
/// from different handles never interleave.
#[derive(Clone)]
pub struct HallOfFame {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl HallOfFame {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Record a winner at the head of the list, keeping the newest
    /// [`HALL_OF_FAME_CAP`] entries.
    ///
    /// A corrupt stored payload is replaced. A failed read aborts the append
    /// without writing, so a list that merely could not be read is never
    /// overwritten.
    pub async fn append(&self, name: &str, points: u32) -> Result<HallOfFameEntry, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(DomainError::Infra(InfraErrorKind::DataCorruption, detail)) => {
                warn!(detail = %detail, "Replacing unreadable Hall of Fame payload");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let entry = HallOfFameEntry {
            id: Ulid::new().to_string(),
            name: name.to_string(),
            points,
            recorded_at: now_millis(),
        };
        entries.insert(0, entry.clone());
        entries.truncate(HALL_OF_FAME_CAP);

        self.write_entries(&entries).await?;
        info!(
            entry_id = %entry.id,
            name = %entry.name,
            points,
            total = entries.len(),
            "Hall of Fame entry recorded"
        );
        Ok(entry)
    }

    /// Entries, newest first. Missing or corrupt data reads as empty; only a
    /// failing store is reported.
    pub async fn list(&self) -> Result<Vec<HallOfFameEntry>, DomainError> {
        match self.read_entries().await {
            Ok(entries) => Ok(entries),
            Err(DomainError::Infra(InfraErrorKind::DataCorruption, detail)) => {
                warn!(detail = %detail, "Hall of Fame payload unreadable, showing empty list");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Like [`list`](Self::list), but a failing store also degrades to empty.
    pub async fn list_or_empty(&self) -> Vec<HallOfFameEntry> {
        self.list().await.unwrap_or_else(|e| {
            warn!(error = %e, "Hall of Fame unavailable, showing empty list");
            Vec::new()
        })
    }

    pub async fn clear(&self) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        self.write_entries(&[]).await?;
        info!("Hall of Fame cleared");
        Ok(())
    }

    async fn read_entries(&self) -> Result<Vec<HallOfFameEntry>, DomainError> {
        let raw = self
            .store
            .get(HALL_OF_FAME_KEY)
            .await
            .map_err(|e| DomainError::persistence(format!("Hall of Fame read failed: {e}")))?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Hall of Fame payload is not a record list: {e}"),
            )
        })?;

        let total = records.len();
        let mut entries: Vec<HallOfFameEntry> = records
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect();
        if entries.len() < total {
            warn!(
                dropped = total - entries.len(),
                kept = entries.len(),
                "Skipping malformed Hall of Fame records"
            );
        }
        entries.truncate(HALL_OF_FAME_CAP);
        Ok(entries)
    }

    async fn write_entries(&self, entries: &[HallOfFameEntry]) -> Result<(), DomainError> {
        let payload = serde_json::to_string(entries).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("ENCODE".into()),
                format!("Hall of Fame encode failed: {e}"),
            )
        })?;
        self.store
            .set(HALL_OF_FAME_KEY, payload)
            .await
            .map_err(|e| DomainError::persistence(format!("Hall of Fame write failed: {e}")))
    }
}

/// Current UTC time at the millisecond precision `dateISO` keeps.
fn now_millis() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - time::Duration::nanoseconds(i64::from(now.nanosecond() % 1_000_000))
}
