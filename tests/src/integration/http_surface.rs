//! End-to-end flows over localhost HTTP.
//!
//! Launches real clusters through the node runtime (one axum control
//! surface per participant, HTTP transport between them) and drives them
//! with a plain HTTP client, exactly as an external orchestrator would.
//!
//! Each test uses its own base port so suites can run in parallel.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;
    use tokio::time::timeout;

    use bv_gateway::participant_addr;
    use node_runtime::{launch, Cluster, ClusterConfig};
    use shared_types::{ParticipantId, Value};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn config(size: usize, base_port: u16) -> ClusterConfig {
        ClusterConfig {
            size,
            base_port,
            collection_window: Duration::from_millis(100),
            round_budget: 5,
            initial_value: Value::One,
            faulty: HashSet::new(),
        }
    }

    fn url(base_port: u16, id: ParticipantId, route: &str) -> String {
        format!("http://{}{}", participant_addr(base_port, id), route)
    }

    /// Poll `/getState` of every participant until all report decided.
    async fn wait_for_decision(client: &reqwest::Client, base_port: u16, size: ParticipantId) {
        timeout(Duration::from_secs(15), async {
            loop {
                let mut all_decided = true;
                for id in 0..size {
                    let state: serde_json::Value = client
                        .get(url(base_port, id, "/getState"))
                        .send()
                        .await
                        .unwrap()
                        .json()
                        .await
                        .unwrap();
                    if state["decided"] != serde_json::json!(true) {
                        all_decided = false;
                        break;
                    }
                }
                if all_decided {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(30)).await;
            }
        })
        .await
        .expect("cluster did not decide within the timeout");
    }

    async fn shutdown(cluster: Cluster) {
        cluster.shutdown().await;
    }

    // =========================================================================
    // END-TO-END TESTS
    // =========================================================================

    /// The full protocol flow over HTTP: readiness barrier, `/start` on
    /// every participant, polling `/getState` until all four finalized on
    /// the unanimous input.
    #[tokio::test]
    async fn test_http_consensus_flow() {
        let base_port = 42610;
        let cluster = launch(&config(4, base_port)).await.unwrap();
        let client = reqwest::Client::new();

        for id in 0..4 {
            let response = client
                .get(url(base_port, id, "/start"))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), 200);
            assert_eq!(response.text().await.unwrap(), "Consensus process started");
        }

        wait_for_decision(&client, base_port, 4).await;

        for id in 0..4 {
            let state: serde_json::Value = client
                .get(url(base_port, id, "/getState"))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            assert_eq!(state["x"], serde_json::json!("1"));
            assert_eq!(state["decided"], serde_json::json!(true));
            assert_eq!(state["k"], serde_json::json!(5));
        }

        shutdown(cluster).await;
    }

    /// `/stop` is observed by every subsequent operation: deliveries are
    /// rejected with the wire error body, and `/start` no longer works.
    #[tokio::test]
    async fn test_http_stop_rejects_further_traffic() {
        let base_port = 42620;
        let cluster = launch(&config(2, base_port)).await.unwrap();
        let client = reqwest::Client::new();

        let response = client
            .get(url(base_port, 1, "/stop"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "Node stopped participating");

        let response = client
            .post(url(base_port, 1, "/message"))
            .json(&serde_json::json!({"fromNodeId": 0, "round": 1, "value": "0"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(response.text().await.unwrap(), "Node is not participating");

        let state: serde_json::Value = client
            .get(url(base_port, 1, "/getState"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            state,
            serde_json::json!({"killed": true, "x": "1", "decided": null, "k": 0})
        );

        let response = client
            .get(url(base_port, 1, "/start"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        shutdown(cluster).await;
    }

    /// A faulty participant reports unhealthy on `/status` and rejects
    /// `/start`, while a healthy peer reports live.
    #[tokio::test]
    async fn test_http_faulty_participant_surface() {
        let base_port = 42630;
        let mut cluster_config = config(2, base_port);
        cluster_config.faulty = HashSet::from([1]);
        let cluster = launch(&cluster_config).await.unwrap();
        let client = reqwest::Client::new();

        let response = client
            .get(url(base_port, 0, "/status"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "live");

        let response = client
            .get(url(base_port, 1, "/status"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(response.text().await.unwrap(), "faulty");

        let response = client
            .get(url(base_port, 1, "/start"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(response.text().await.unwrap(), "Node cannot start");

        shutdown(cluster).await;
    }
}
