use std::collections::HashMap;

use log::info;

use crate::zone::{ZoneName, ZoneRecord};

/// Whether a lookup has to refresh the cache before it can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Populate {
    /// Every requested zone is already cached.
    Skip,
    /// Nothing has been cached yet.
    Cold,
    /// The listed zones are not cached. The provider may have added them since
    /// the last refresh.
    Missing(Vec<ZoneName>),
}

impl Populate {
    pub fn decide<S: AsRef<str>>(entries: &HashMap<ZoneName, ZoneRecord>, names: &[S]) -> Self {
        if entries.is_empty() {
            return Populate::Cold;
        }

        let mut missing: Vec<ZoneName> = Vec::new();
        for name in names {
            let name = name.as_ref();
            if entries.contains_key(name) || missing.iter().any(|m| m == name) {
                continue;
            }
            info!("zone {} not found in zone cache", name);
            missing.push(name.to_string());
        }

        if missing.is_empty() {
            Populate::Skip
        } else {
            Populate::Missing(missing)
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Populate::Skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> HashMap<ZoneName, ZoneRecord> {
        names
            .iter()
            .map(|n| (n.to_string(), ZoneRecord::new(*n, format!("{}-id", n), "availability-zone")))
            .collect()
    }

    #[test]
    fn test_decide_cold_when_empty() {
        let decision = Populate::decide(&HashMap::new(), &["a"]);
        assert_eq!(decision, Populate::Cold);
        assert!(decision.is_required());
    }

    #[test]
    fn test_decide_skip_when_all_cached() {
        let decision = Populate::decide(&entries(&["a", "b"]), &["b", "a", "b"]);
        assert_eq!(decision, Populate::Skip);
        assert!(!decision.is_required());
    }

    #[test]
    fn test_decide_missing_lists_distinct_names() {
        let decision = Populate::decide(&entries(&["a"]), &["c", "a", "z", "c"]);
        assert_eq!(
            decision,
            Populate::Missing(vec!["c".to_string(), "z".to_string()])
        );
        assert!(decision.is_required());
    }
}
