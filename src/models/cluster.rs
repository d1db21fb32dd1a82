use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClusterVersion {
    pub number: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClusterInfo {
    #[serde(default)]
    pub name: Option<String>,
    pub cluster_name: String,
    pub version: ClusterVersion,
}

impl Display for ClusterInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (version {})", self.cluster_name, self.version.number)
    }
}
