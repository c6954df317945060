//! Session middleware configuration for the admin panel.
//!
//! Sessions only carry the client context ID. Records live in a moka cache
//! with the same idle window as the session cookie, so abandoned sessions
//! are dropped instead of accumulating, and all of them vanish on restart.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore, session_store};

use crate::config::AdminConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "inventory_session";

/// In-memory session records that expire when idle.
#[derive(Debug, Clone)]
pub struct SessionRecords {
    records: Cache<Id, Record>,
}

impl SessionRecords {
    /// Records untouched for `idle` are evicted.
    #[must_use]
    pub fn new(idle: Duration) -> Self {
        Self {
            records: Cache::builder().time_to_idle(idle).build(),
        }
    }

    /// Drop records whose expiry date has passed. Returns how many went.
    pub async fn purge_expired(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let expired: Vec<Id> = self
            .records
            .iter()
            .filter(|(_, record)| record.expiry_date <= now)
            .map(|(id, _)| *id)
            .collect();

        for id in &expired {
            self.records.invalidate(id).await;
        }
        expired.len()
    }

    /// Purge expired records every `period`, forever.
    pub async fn purge_every(self, period: Duration) {
        let mut interval = tokio::time::interval(period);
        // First tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            let purged = self.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "Expired sessions purged");
            }
        }
    }

    /// Number of stored records once pending evictions have run.
    pub async fn len(&self) -> u64 {
        self.records.run_pending_tasks().await;
        self.records.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for SessionRecords {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.records.contains_key(&record.id) {
            record.id = Id::default();
        }
        self.records.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.records.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc();
        Ok(self
            .records
            .get(session_id)
            .await
            .filter(|record| record.expiry_date > now))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.records.invalidate(session_id).await;
        Ok(())
    }
}

/// Create the session layer over `records`.
#[must_use]
pub fn create_session_layer(
    records: SessionRecords,
    config: &AdminConfig,
) -> SessionManagerLayer<SessionRecords> {
    let idle_secs = i64::try_from(config.session_idle.as_secs()).unwrap_or(i64::MAX);

    SessionManagerLayer::new(records)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(idle_secs),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_sessions::cookie::time::Duration as CookieDuration;
    type Data = std::collections::HashMap<String, serde_json::Value>;

    use super::*;

    fn record(expires_in: CookieDuration) -> Record {
        Record {
            id: Id::default(),
            data: Data::default(),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let records = SessionRecords::new(Duration::from_secs(60));
        let mut live = record(CookieDuration::minutes(30));
        records.create(&mut live).await.unwrap();

        assert_eq!(records.load(&live.id).await.unwrap(), Some(live.clone()));

        records.delete(&live.id).await.unwrap();
        assert!(records.load(&live.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_records_are_not_loaded() {
        let records = SessionRecords::new(Duration::from_secs(60));
        let stale = record(CookieDuration::minutes(-1));
        records.save(&stale).await.unwrap();

        assert!(records.load(&stale.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_purge_drops_only_expired_records() {
        let records = SessionRecords::new(Duration::from_secs(60));
        let live = record(CookieDuration::minutes(30));
        records.save(&live).await.unwrap();
        for _ in 0..3 {
            records.save(&record(CookieDuration::minutes(-1))).await.unwrap();
        }
        assert_eq!(records.len().await, 4);

        assert_eq!(records.purge_expired().await, 3);
        assert_eq!(records.len().await, 1);
        assert!(records.load(&live.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_idle_records_are_evicted() {
        let records = SessionRecords::new(Duration::from_millis(50));
        records.save(&record(CookieDuration::minutes(30))).await.unwrap();

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(records.is_empty().await);
    }
}
