use anyhow::Result;

use super::http::HttpConnection;
use crate::models::{CatIndex, ClusterInfo};

pub enum Connection {
    Http(HttpConnection),
}

impl Connection {
    pub fn url(&self) -> &url::Url {
        match self {
            Connection::Http(http) => http.url(),
        }
    }

    pub async fn cluster_info(&self) -> Result<ClusterInfo> {
        match self {
            Connection::Http(http) => http.cluster_info().await,
        }
    }

    pub async fn list_indices(&self) -> Result<Vec<CatIndex>> {
        match self {
            Connection::Http(http) => http.list_indices().await,
        }
    }

    pub async fn delete_index(&self, name: &str) -> Result<()> {
        match self {
            Connection::Http(http) => http.delete_index(name).await,
        }
    }
}
