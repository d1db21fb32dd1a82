use serde::{Deserialize, Serialize};

/// One row of `_cat/indices?format=json`. Every column comes back as a string.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatIndex {
    pub index: String,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "docs.count")]
    pub docs_count: Option<String>,
    #[serde(default, rename = "store.size")]
    pub store_size: Option<String>,
}
