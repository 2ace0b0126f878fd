use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use zone_cache::directory::{HttpDirectory, StaticDirectory, ZoneDirectory};
use zone_cache::error::Error;
use zone_cache::error::Result;
use zone_cache::zone::ZoneRecord;

////////////////////////////////////////////////////////////
// Parameters
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Deserialize)]
pub struct CfgParam {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CfgParamList(Vec<CfgParam>);

impl CfgParamList {
    pub fn iter(&self) -> impl Iterator<Item = &CfgParam> {
        self.0.iter()
    }
}

////////////////////////////////////////////////////////////
// Authentication
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Deserialize)]
pub struct CfgAuthentication {
    pub method: String,

    #[serde(default)]
    pub params: CfgParamList,
}

impl CfgAuthentication {
    pub fn get_value_ref(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == key)
            .map(|p| p.value.as_str())
    }

    /// Bearer token to send to the directory, if any.
    pub fn api_token(&self) -> Result<Option<&str>> {
        match self.method.as_str() {
            "none" => Ok(None),
            "api_token" => self.get_value_ref("api_token").map(Some).ok_or_else(|| {
                Error::ConfigError(
                    "authentication method is declared as api_token, but api_token is not found"
                        .to_string(),
                )
            }),
            other => Err(Error::ConfigError(format!(
                "{}: unsupported authentication method for zone directory",
                other
            ))),
        }
    }
}

////////////////////////////////////////////////////////////
// Directory
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CfgDirectory {
    Http {
        endpoint: String,
        region: String,

        #[serde(default)]
        authentication: Option<CfgAuthentication>,
    },
    Static {
        zones: Vec<ZoneRecord>,
    },
}

impl CfgDirectory {
    pub fn into_directory(self) -> Result<Arc<dyn ZoneDirectory + Send + Sync>> {
        match self {
            CfgDirectory::Http {
                endpoint,
                region,
                authentication,
            } => {
                validate_endpoint(&endpoint)?;
                if region.is_empty() {
                    return Err(Error::ConfigError(
                        "directory region must not be empty".to_string(),
                    ));
                }

                let token = match &authentication {
                    Some(auth) => auth.api_token()?,
                    None => None,
                };
                Ok(Arc::new(HttpDirectory::new(&endpoint, &region, token)))
            }
            CfgDirectory::Static { zones } => {
                if let Some(zone) = zones.iter().find(|z| z.name.is_empty()) {
                    return Err(Error::ConfigError(format!(
                        "static zone without a name: {:?}",
                        zone
                    )));
                }
                Ok(Arc::new(StaticDirectory::new(zones)))
            }
        }
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Error::ConfigError(format!("{}: directory endpoint {}", endpoint, reason))
    };

    let url = reqwest::Url::parse(endpoint).map_err(|e| invalid(&e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("must be an http(s) url"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("has no host"));
    }
    Ok(())
}

////////////////////////////////////////////////////////////
// Yaml parser
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Deserialize)]
pub struct Cfg {
    pub directory: CfgDirectory,
}

pub struct Parser;

impl Parser {
    pub fn parse_yaml<P: AsRef<Path>>(path: P) -> Result<Cfg> {
        let reader = Self::file_reader(path)?;
        let config: Cfg = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    fn file_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
        let f = std::fs::File::open(path)?;
        Ok(BufReader::new(f))
    }
}

////////////////////////////////////////////////////////////
// Unit test
////////////////////////////////////////////////////////////
#[cfg(test)]
#[path = "config_test.rs"]
mod test;
