use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub enum HeaderKey {
    Authorization,
    Accept,
}

impl HeaderKey {
    fn as_str(&self) -> &str {
        match self {
            HeaderKey::Authorization => "Authorization",
            HeaderKey::Accept => "Accept",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    key: HeaderKey,
    value: String,
}

impl Header {
    pub fn new(key: HeaderKey, value: String) -> Self {
        Self { key, value }
    }

    pub fn bearer(token: &str) -> Self {
        Self::new(HeaderKey::Authorization, format!("Bearer {}", token))
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn into_body(self) -> Result<String> {
        if self.status == 200 {
            Ok(self.body)
        } else {
            Err(Error::HttpError(format!(
                "status: {}, body: {}",
                self.status, self.body
            )))
        }
    }

    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.into_body()?;
        let value: T = serde_json::from_str(&body)?;
        Ok(value)
    }
}

pub struct Client {
    cli: reqwest::Client,
    dft_headers: Vec<Header>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self {
            cli: reqwest::Client::new(),
            dft_headers: vec![Header::new(
                HeaderKey::Accept,
                "application/json".to_string(),
            )],
        }
    }

    pub fn add_default_header(&mut self, header: Header) {
        self.dft_headers.push(header);
    }

    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let mut builder = self.cli.get(url).query(query);
        for header in &self.dft_headers {
            builder = builder.header(header.key.as_str(), header.value.as_str());
        }

        let response = builder.send().await?;
        Ok(Response {
            status: response.status().into(),
            body: response.text().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        ok: bool,
    }

    #[test]
    fn test_response_into_json() {
        let resp = Response {
            status: 200,
            body: r#"{"ok": true}"#.to_string(),
        };
        let probe: Probe = resp.into_json().unwrap();
        assert!(probe.ok);
    }

    #[test]
    fn test_response_non_200_is_http_error() {
        let resp = Response {
            status: 403,
            body: "denied".to_string(),
        };
        let err = resp.into_body().unwrap_err();
        assert!(matches!(err, Error::HttpError(ref msg) if msg.contains("403")));
    }

    #[test]
    fn test_response_bad_json_is_parse_error() {
        let resp = Response {
            status: 200,
            body: "not json".to_string(),
        };
        let err = resp.into_json::<Probe>().unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }
}
