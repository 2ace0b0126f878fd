use async_trait::async_trait;

use crate::error::Result;
use crate::zone::ZoneRecord;

use super::ZoneDirectory;

/// A directory backed by a fixed list, typically loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    zones: Vec<ZoneRecord>,
}

impl StaticDirectory {
    pub fn new(zones: Vec<ZoneRecord>) -> Self {
        Self { zones }
    }
}

#[async_trait]
impl ZoneDirectory for StaticDirectory {
    async fn list_zones(&self) -> Result<Vec<ZoneRecord>> {
        Ok(self.zones.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_directory_lists_all() {
        let dir = StaticDirectory::new(vec![
            ZoneRecord::new("us-east-1a", "use1-az6", "availability-zone"),
            ZoneRecord::new("us-east-1-bos-1a", "use1-bos1-az1", "local-zone"),
        ]);
        let zones = dir.list_zones().await.unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[1].zone_type, "local-zone");
    }
}
