use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    configuration::Configuration,
    connectors::connection::Connection,
    models::ClusterInfo,
    retention::{classify, evaluate, Decision},
};

use super::{IndexAge, PurgeSummary};

pub struct Actions {
    pub config: Configuration,
    connection: Connection,
}

impl Actions {
    pub fn new(config: Configuration) -> Result<Actions> {
        let connection = config.connection()?;
        Ok(Actions { config, connection })
    }

    pub async fn info(&self) -> Result<ClusterInfo> {
        self.connection.cluster_info().await
    }

    /// One retention pass over the cluster as it stands on `today`.
    ///
    /// Stops at the first failure to list or delete, or at a log index whose name carries
    /// an impossible date. Deletions made before the failure are not undone.
    pub async fn purge(&self, today: NaiveDate) -> Result<PurgeSummary> {
        match self.connection.cluster_info().await {
            Ok(cluster) => info!("Connected to {} at {}", cluster, self.connection.url()),
            Err(e) => warn!(
                "Could not identify cluster at {}: {:?}",
                self.connection.url(),
                e
            ),
        }

        let policy = self.config.policy();
        let catalog = self.connection.list_indices().await?;
        let mut summary = PurgeSummary {
            examined: catalog.len(),
            ..Default::default()
        };

        for descriptor in classify(catalog.iter().map(|entry| entry.index.as_str())) {
            let descriptor = descriptor?;
            summary.matched += 1;
            debug!(
                "Index {} is {} days old",
                descriptor,
                descriptor.age_days(today)
            );

            match evaluate(&descriptor, today, policy) {
                Some(Decision::Delete(name)) => {
                    self.connection.delete_index(&name).await?;
                    info!("Deleted index {}", name);
                    summary.deleted.push(name);
                }
                Some(Decision::Report(name)) => {
                    info!(
                        "Would delete index {}, set ALLOW_DELETE to enable deletion",
                        name
                    );
                    summary.reported.push(name);
                }
                None => summary.retained += 1,
            }
        }

        info!("Purge finished: {}", summary);
        Ok(summary)
    }

    /// Every log index with its age against the configured retention. Never deletes.
    pub async fn list(&self, today: NaiveDate) -> Result<Vec<IndexAge>> {
        let policy = self.config.policy();
        let catalog = self.connection.list_indices().await?;
        let ages = classify(catalog.iter().map(|entry| entry.index.as_str()))
            .map(|descriptor| {
                descriptor.map(|descriptor| {
                    let age_days = descriptor.age_days(today);
                    IndexAge {
                        descriptor,
                        age_days,
                        expired: policy.is_expired(age_days),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ages)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::retention::{InvalidDateError, RetentionPolicy};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 10).unwrap()
    }

    fn actions(server: &MockServer, policy: RetentionPolicy) -> Actions {
        let config = Configuration::new(Url::parse(&server.uri()).unwrap(), policy).unwrap();
        Actions::new(config).unwrap()
    }

    async fn mount_cluster(server: &MockServer, indices: &[&str]) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "node-1",
                "cluster_name": "logs",
                "version": { "number": "7.10.2" }
            })))
            .mount(server)
            .await;
        let catalog: Vec<_> = indices
            .iter()
            .map(|index| json!({ "index": index, "health": "green", "status": "open" }))
            .collect();
        Mock::given(method("GET"))
            .and(path("/_cat/indices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(catalog))
            .mount(server)
            .await;
    }

    async fn expect_delete(server: &MockServer, index: &str, times: u64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/{index}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })),
            )
            .expect(times)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn deletes_expired_indices_when_allowed() {
        let server = MockServer::start().await;
        mount_cluster(
            &server,
            &[
                "filebeat-2023.01.01",
                "logstash-2023.01.08",
                "other-index-2023.01.01",
                "logstash-2023.01.06",
            ],
        )
        .await;
        expect_delete(&server, "filebeat-2023.01.01", 1).await;
        expect_delete(&server, "logstash-2023.01.06", 1).await;
        expect_delete(&server, "logstash-2023.01.08", 0).await;
        expect_delete(&server, "other-index-2023.01.01", 0).await;

        let summary = actions(&server, RetentionPolicy::new(3, true))
            .purge(today())
            .await
            .unwrap();

        assert_eq!(
            summary,
            PurgeSummary {
                examined: 4,
                matched: 3,
                retained: 1,
                deleted: vec![
                    "filebeat-2023.01.01".to_string(),
                    "logstash-2023.01.06".to_string()
                ],
                reported: vec![],
            }
        );
    }

    #[tokio::test]
    async fn dry_run_never_deletes() {
        let server = MockServer::start().await;
        mount_cluster(&server, &["filebeat-2023.01.01", "logstash-2023.01.08"]).await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let summary = actions(&server, RetentionPolicy::new(3, false))
            .purge(today())
            .await
            .unwrap();

        assert_eq!(summary.reported, vec!["filebeat-2023.01.01".to_string()]);
        assert!(summary.deleted.is_empty());
        assert_eq!(summary.retained, 1);
    }

    #[tokio::test]
    async fn invalid_date_aborts_the_run() {
        let server = MockServer::start().await;
        mount_cluster(&server, &["filebeat-2023.13.01", "filebeat-2023.01.01"]).await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let error = actions(&server, RetentionPolicy::new(3, true))
            .purge(today())
            .await
            .unwrap_err();

        let invalid = error.downcast_ref::<InvalidDateError>().unwrap();
        assert_eq!(invalid.index, "filebeat-2023.13.01");
        assert_eq!(invalid.month, 13);
    }

    #[tokio::test]
    async fn failed_delete_stops_the_pass() {
        let server = MockServer::start().await;
        mount_cluster(&server, &["filebeat-2023.01.01", "filebeat-2023.01.02"]).await;
        Mock::given(method("DELETE"))
            .and(path("/filebeat-2023.01.01"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;
        expect_delete(&server, "filebeat-2023.01.02", 0).await;

        let result = actions(&server, RetentionPolicy::new(3, true))
            .purge(today())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn purges_even_when_cluster_root_is_forbidden() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/_cat/indices"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "index": "filebeat-2023.01.01" }])),
            )
            .expect(1)
            .mount(&server)
            .await;
        expect_delete(&server, "filebeat-2023.01.01", 1).await;

        let summary = actions(&server, RetentionPolicy::new(3, true))
            .purge(today())
            .await
            .unwrap();
        assert_eq!(summary.deleted, vec!["filebeat-2023.01.01".to_string()]);
    }

    #[tokio::test]
    async fn list_reports_ages_without_deleting() {
        let server = MockServer::start().await;
        mount_cluster(
            &server,
            &["logstash-2023.01.07", ".kibana", "filebeat-2023.01.06"],
        )
        .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let ages = actions(&server, RetentionPolicy::new(3, true))
            .list(today())
            .await
            .unwrap();

        let rows: Vec<_> = ages
            .iter()
            .map(|age| (age.descriptor.name.as_str(), age.age_days, age.expired))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("logstash-2023.01.07", 3, false),
                ("filebeat-2023.01.06", 4, true),
            ]
        );
    }
}
