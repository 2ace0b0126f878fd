use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::Mutex;

use crate::directory::ZoneDirectory;
use crate::error::{Error, Result};
use crate::zone::{ZoneName, ZoneRecord};

use super::observer::{LogObserver, ZoneObserver};
use super::policy::Populate;

/// Read-through cache of zone metadata.
///
/// Zones are fetched from the directory on first use and again whenever a
/// lookup names a zone that is not cached yet. Entries are never evicted.
///
/// The lock is held for the whole lookup, including the directory call, so
/// concurrent lookups against a cold cache result in a single listing.
pub struct ZoneCache {
    directory: Arc<dyn ZoneDirectory + Send + Sync>,
    observer: Arc<dyn ZoneObserver>,
    entries: Mutex<HashMap<ZoneName, ZoneRecord>>,
}

impl ZoneCache {
    pub fn new(directory: Arc<dyn ZoneDirectory + Send + Sync>) -> Self {
        Self::with_observer(directory, Arc::new(LogObserver))
    }

    pub fn with_observer(
        directory: Arc<dyn ZoneDirectory + Send + Sync>,
        observer: Arc<dyn ZoneObserver>,
    ) -> Self {
        Self {
            directory,
            observer,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the records of the requested zones that the provider knows of.
    ///
    /// Unknown zones are left out of the result and reported to the observer.
    /// Fails only when a refresh was needed and the directory call failed.
    pub async fn lookup<S: AsRef<str>>(&self, names: &[S]) -> Result<HashMap<ZoneName, ZoneRecord>> {
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        let mut entries = self.entries.lock().await;

        let decision = Populate::decide(&entries, names);
        if decision.is_required() {
            debug!("populating zone cache: {:?}", decision);
            Self::populate(self.directory.as_ref(), &mut entries).await?;
        }

        let mut found = HashMap::new();
        let mut reported = HashSet::new();
        for name in names {
            let name = name.as_ref();
            if found.contains_key(name) {
                continue;
            }
            match entries.get(name) {
                Some(zone) => {
                    found.insert(name.to_string(), zone.clone());
                }
                None => {
                    if reported.insert(name) {
                        self.observer.unknown_zone(name);
                    }
                }
            }
        }

        Ok(found)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    // Merges the listing into `entries`; zones missing from the listing are kept.
    // Must be called with the lock held.
    async fn populate(
        directory: &(dyn ZoneDirectory + Send + Sync),
        entries: &mut HashMap<ZoneName, ZoneRecord>,
    ) -> Result<()> {
        let zones = directory.list_zones().await.map_err(|e| {
            Error::DirectoryUnavailable("error describe availability zones".to_string(), Box::new(e))
        })?;

        let mut added = 0;
        for zone in zones {
            if zone.name.is_empty() {
                warn!("skipping zone without a name: {:?}", zone);
                continue;
            }
            if entries.insert(zone.name.clone(), zone).is_none() {
                added += 1;
            }
        }

        debug!(
            "zone cache populated: {} new, {} total",
            added,
            entries.len()
        );
        Ok(())
    }
}
