//! In-memory repository for unit testing and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::db::repository::{RepositoryResult, StationRepository, TelemetryRepository};
use crate::models::{DailyRecord, Station};

#[derive(Default)]
struct Store {
    // Insertion order doubles as the store-defined station order.
    stations: Vec<Station>,
    records: HashMap<(String, NaiveDate), DailyRecord>,
}

/// Thread-safe in-memory implementation of the repository traits.
///
/// Seeding goes through the inherent `insert_*` methods rather than the
/// traits: the aggregation engine never writes, so the traits stay
/// read-only and ingestion-shaped writes exist only for fixtures.
#[derive(Default)]
pub struct LocalRepository {
    store: RwLock<Store>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a station. An existing entry with the same id is replaced in
    /// place, keeping its position in the store order.
    pub fn insert_station(&self, station: Station) {
        let mut store = self.store.write();
        match store
            .stations
            .iter_mut()
            .find(|existing| existing.id == station.id)
        {
            Some(slot) => *slot = station,
            None => store.stations.push(station),
        }
    }

    /// Seed one day of telemetry for a station.
    pub fn insert_record(&self, record: DailyRecord) {
        let mut store = self.store.write();
        store
            .records
            .insert((record.station_id.clone(), record.date), record);
    }

    /// Number of seeded records, for fixture sanity checks.
    pub fn record_count(&self) -> usize {
        self.store.read().records.len()
    }
}

#[async_trait]
impl StationRepository for LocalRepository {
    async fn list_stations(&self) -> RepositoryResult<Vec<Station>> {
        Ok(self.store.read().stations.clone())
    }

    async fn find_station(&self, station_id: &str) -> RepositoryResult<Option<Station>> {
        Ok(self
            .store
            .read()
            .stations
            .iter()
            .find(|station| station.id == station_id)
            .cloned())
    }
}

#[async_trait]
impl TelemetryRepository for LocalRepository {
    async fn fetch_daily_record(
        &self,
        station_id: &str,
        date: NaiveDate,
    ) -> RepositoryResult<Option<DailyRecord>> {
        Ok(self
            .store
            .read()
            .records
            .get(&(station_id.to_string(), date))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sample;
    use chrono::NaiveDateTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn timestamp(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[tokio::test]
    async fn test_station_order_is_insertion_order() {
        let repo = LocalRepository::new();
        repo.insert_station(Station::new("stgrz", Some("Graz")));
        repo.insert_station(Station::new("stvie", Some("Vienna")));
        repo.insert_station(Station::new("stlin", Some("Linz")));

        let stations = repo.list_stations().await.unwrap();
        let ids: Vec<&str> = stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["stgrz", "stvie", "stlin"]);
    }

    #[tokio::test]
    async fn test_reinsert_keeps_position() {
        let repo = LocalRepository::new();
        repo.insert_station(Station::new("stgrz", Some("Graz")));
        repo.insert_station(Station::new("stvie", Some("Vienna")));
        repo.insert_station(Station::new("stgrz", Some("Graz University")));

        let stations = repo.list_stations().await.unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name.as_deref(), Some("Graz University"));
    }

    #[tokio::test]
    async fn test_missing_record_is_none() {
        let repo = LocalRepository::new();
        let fetched = repo
            .fetch_daily_record("stgrz", date("2024-06-01"))
            .await
            .unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_record_round_trip() {
        let repo = LocalRepository::new();
        let record = DailyRecord::new(
            "stgrz",
            date("2024-06-01"),
            vec![Sample::new(timestamp("2024-06-01 08:00:00"), 18.5, 120000.0)],
        );
        repo.insert_record(record.clone());

        let fetched = repo
            .fetch_daily_record("stgrz", date("2024-06-01"))
            .await
            .unwrap();
        assert_eq!(fetched, Some(record));
        assert_eq!(repo.record_count(), 1);
    }
}
