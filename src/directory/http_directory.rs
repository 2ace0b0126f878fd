use std::collections::HashSet;
use std::future::Future;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::wrapper::http::{Client, Header};
use crate::zone::ZoneRecord;

use super::ZoneDirectory;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AzItem {
    #[serde(default)]
    zone_name: String,

    #[serde(default)]
    zone_id: String,

    #[serde(default)]
    zone_type: String,
}

impl From<AzItem> for ZoneRecord {
    fn from(item: AzItem) -> Self {
        ZoneRecord {
            name: item.zone_name,
            id: item.zone_id,
            zone_type: item.zone_type,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeZonesPage {
    #[serde(default)]
    availability_zones: Vec<AzItem>,

    #[serde(default)]
    next_token: Option<String>,
}

/// Client for a JSON "describe availability zones" endpoint.
pub struct HttpDirectory {
    endpoint: String,
    region: String,
    cli: Client,
}

impl HttpDirectory {
    pub fn new(endpoint: &str, region: &str, api_token: Option<&str>) -> Self {
        let mut cli = Client::new();
        if let Some(token) = api_token {
            cli.add_default_header(Header::bearer(token));
        }

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            region: region.to_string(),
            cli,
        }
    }

    async fn describe_page(&self, next_token: Option<String>) -> Result<DescribeZonesPage> {
        let url = format!("{}/availability-zones", self.endpoint);

        let mut query = vec![("region", self.region.as_str())];
        if let Some(token) = next_token.as_deref() {
            query.push(("next_token", token));
        }

        let resp = self.cli.get(&url, &query).await?;
        resp.into_json()
    }
}

#[async_trait]
impl ZoneDirectory for HttpDirectory {
    async fn list_zones(&self) -> Result<Vec<ZoneRecord>> {
        drain_pages(|token| self.describe_page(token)).await
    }
}

// Follows NextToken until the listing is exhausted.
async fn drain_pages<F, Fut>(mut fetch: F) -> Result<Vec<ZoneRecord>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<DescribeZonesPage>>,
{
    let mut zones = Vec::new();
    let mut seen_tokens = HashSet::new();
    let mut token: Option<String> = None;

    loop {
        let page = fetch(token.take()).await?;
        zones.extend(page.availability_zones.into_iter().map(ZoneRecord::from));

        match page.next_token.filter(|t| !t.is_empty()) {
            Some(next) => {
                if !seen_tokens.insert(next.clone()) {
                    return Err(Error::ParseError(format!(
                        "describe availability zones returned a repeated next token: {}",
                        next
                    )));
                }
                token = Some(next);
            }
            None => return Ok(zones),
        }
    }
}
