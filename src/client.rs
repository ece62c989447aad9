use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ExportError, Result};
use crate::responses::Document;
use crate::types::Project;

const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";
const USER_AGENT: &str = concat!("snyk-export/", env!("CARGO_PKG_VERSION"));

pub struct SnykClient {
    http: Client,
    base_url: Url,
    version: String,
    token: String,
}

impl SnykClient {
    pub fn new(base_url: &str, version: &str, token: String) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ExportError::InvalidUrl(format!("{base_url}: {e}")))?;

        if parsed.cannot_be_a_base() {
            return Err(ExportError::InvalidUrl(base_url.to_string()));
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: parsed,
            version: version.to_string(),
            token,
        })
    }

    /// Build `{base}/{segments...}?version=...`. Each segment is percent-encoded
    /// on its own, so an ID containing `/` stays a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| ExportError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        url.query_pairs_mut().append_pair("version", &self.version);

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "sending request");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(CONTENT_TYPE, JSON_API_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if status != StatusCode::OK {
            return Err(ExportError::UnexpectedStatus {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the first page of projects for an organization, in response order.
    pub async fn list_projects(&self, org_id: &str) -> Result<Vec<Project>> {
        let url = self.endpoint(&["orgs", org_id, "projects"])?;

        let document: Document<Project> = self.get(url).await?;

        if document.has_next_page() {
            warn!(org_id, "more projects are available; only the first page was fetched");
        }

        let projects = document.into_attributes();
        info!(org_id, count = projects.len(), "decoded projects");

        Ok(projects)
    }
}
