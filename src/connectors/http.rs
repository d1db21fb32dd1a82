use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::models::{CatIndex, ClusterInfo};

/// Talks to an Elasticsearch-compatible cluster over its REST API.
pub struct HttpConnection {
    url: url::Url,
    client: reqwest::Client,
}

impl HttpConnection {
    pub fn new(url: url::Url, timeout: Duration) -> Result<HttpConnection> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpConnection { url, client })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<url::Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Cluster url {} cannot be a base", self.url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn cluster_info(&self) -> Result<ClusterInfo> {
        let url = self.endpoint(&[])?;
        debug!("Sending request to {}", url.as_str());
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .with_context(|| format!("Failed to reach cluster at {url}"))?
            .error_for_status()?;
        response.json().await.map_err(Into::into)
    }

    pub async fn list_indices(&self) -> Result<Vec<CatIndex>> {
        let mut url = self.endpoint(&["_cat", "indices"])?;
        url.query_pairs_mut().append_pair("format", "json");
        debug!("Sending request to {}", url.as_str());
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .with_context(|| format!("Failed to list indices at {url}"))?
            .error_for_status()?;
        let indices: Vec<CatIndex> = response.json().await?;
        debug!("Cluster reported {} indices: {:?}", indices.len(), indices);
        Ok(indices)
    }

    pub async fn delete_index(&self, name: &str) -> Result<()> {
        let url = self.endpoint(&[name])?;
        debug!("Deleting index at {}", url.as_str());
        self.client
            .delete(url.as_str())
            .send()
            .await
            .with_context(|| format!("Failed to delete index {name}"))?
            .error_for_status()
            .with_context(|| format!("Cluster refused to delete index {name}"))?;
        Ok(())
    }
}
