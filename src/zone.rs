use serde::Deserialize;

////////////////////////////////////////////////////////////
// Zone
////////////////////////////////////////////////////////////
pub type ZoneName = String;

/// Metadata of one availability zone as reported by the provider.
///
/// A record never changes once the provider has published it, so the cache
/// hands out clones freely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZoneRecord {
    pub name: ZoneName,

    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default)]
    pub zone_type: String,
}

impl ZoneRecord {
    pub fn new(name: impl Into<String>, id: impl Into<String>, zone_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            zone_type: zone_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_record_deserialize() {
        let yaml = r#"
name: us-east-1a
id: use1-az6
type: availability-zone
"#;
        let zone: ZoneRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(zone, ZoneRecord::new("us-east-1a", "use1-az6", "availability-zone"));
    }

    #[test]
    fn test_zone_record_deserialize_defaults() {
        let zone: ZoneRecord = serde_yaml::from_str("name: us-east-1-bos-1a").unwrap();
        assert_eq!(zone.name, "us-east-1-bos-1a");
        assert_eq!(zone.id, "");
        assert_eq!(zone.zone_type, "");
    }
}
