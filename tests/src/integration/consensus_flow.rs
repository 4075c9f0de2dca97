//! In-process consensus flows over the in-memory transport.
//!
//! These exercise the full round loop of several participants at once:
//! broadcast, collection window, decision, and finalization, plus the
//! rejection semantics of stopped and faulty participants as seen by their
//! peers.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use bv_consensus::adapters::InMemoryTransport;
    use bv_consensus::{ParticipantApi, ParticipantConfig, ParticipantService};
    use shared_types::{ParticipantId, Value};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Build an in-process cluster of `n` participants wired through one
    /// in-memory transport. Faulty ids are seeded with the placeholder.
    fn build_cluster(
        n: usize,
        initial: Value,
        window: Duration,
        round_budget: u64,
        faulty: &[ParticipantId],
    ) -> Vec<Arc<ParticipantService<InMemoryTransport>>> {
        let transport = Arc::new(InMemoryTransport::new());
        let mut participants = Vec::with_capacity(n);
        for id in 0..n as ParticipantId {
            let is_faulty = faulty.contains(&id);
            let mut config = ParticipantConfig::new(
                id,
                n,
                if is_faulty { Value::Unknown } else { initial },
            );
            config.faulty = is_faulty;
            config.fault_tolerance = faulty.len();
            config.collection_window = window;
            config.round_budget = round_budget;
            let participant =
                Arc::new(ParticipantService::new(config, Arc::clone(&transport)).unwrap());
            transport.register(id, participant.clone() as Arc<dyn ParticipantApi>);
            participants.push(participant);
        }
        participants
    }

    /// Wait until every listed participant reports `decided == true`.
    async fn wait_for_decision(participants: &[Arc<ParticipantService<InMemoryTransport>>]) {
        timeout(Duration::from_secs(10), async {
            loop {
                let mut all_decided = true;
                for participant in participants {
                    if participant.snapshot().await.decided != Some(true) {
                        all_decided = false;
                        break;
                    }
                }
                if all_decided {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
        .await
        .expect("cluster did not decide within the timeout");
    }

    // =========================================================================
    // INTEGRATION TESTS: CONVERGENCE
    // =========================================================================

    /// N=4, F=0, everyone starts with `1`: each round every participant
    /// receives three `1`s, a strict majority of 4, so the unanimous input
    /// survives every round and the final decision is unanimous.
    #[tokio::test]
    async fn test_unanimous_cluster_decides_unanimously() {
        let participants =
            build_cluster(4, Value::One, Duration::from_millis(100), 5, &[]);
        for participant in &participants {
            participant.start().await.unwrap();
        }

        wait_for_decision(&participants).await;

        for participant in &participants {
            let snapshot = participant.snapshot().await;
            assert_eq!(snapshot.decided, Some(true));
            assert_eq!(snapshot.x, Value::One);
            assert_eq!(snapshot.k, 5, "round counter must equal the budget");
            assert!(!snapshot.killed);
        }
    }

    /// Same as above seeded with `0`, to rule out a bias toward `1`.
    #[tokio::test]
    async fn test_unanimous_zero_cluster_decides_zero() {
        let participants =
            build_cluster(4, Value::Zero, Duration::from_millis(100), 3, &[]);
        for participant in &participants {
            participant.start().await.unwrap();
        }

        wait_for_decision(&participants).await;

        for participant in &participants {
            let snapshot = participant.snapshot().await;
            assert_eq!(snapshot.x, Value::Zero);
            assert_eq!(snapshot.k, 3);
        }
    }

    // =========================================================================
    // INTEGRATION TESTS: FAULTY AND STOPPED PARTICIPANTS
    // =========================================================================

    /// A faulty participant never starts, never accepts a value, and stays
    /// frozen at its placeholder state while the rest of the cluster runs
    /// to its round budget.
    #[tokio::test]
    async fn test_faulty_participant_stays_frozen() {
        let participants =
            build_cluster(3, Value::One, Duration::from_millis(50), 2, &[2]);

        assert!(participants[2].start().await.is_err());
        for participant in &participants[..2] {
            participant.start().await.unwrap();
        }

        wait_for_decision(&participants[..2]).await;

        let faulty = participants[2].snapshot().await;
        assert_eq!(faulty.decided, None);
        assert_eq!(faulty.k, 0);
        assert_eq!(faulty.x, Value::Unknown);
    }

    /// Delivering to a stopped participant is rejected by the transport and
    /// leaves the receiver's snapshot untouched.
    #[tokio::test]
    async fn test_stopped_participant_rejects_peer_traffic() {
        let participants =
            build_cluster(2, Value::One, Duration::from_millis(50), 1, &[]);

        participants[1].stop().await;
        let before = participants[1].snapshot().await;

        // Participant 0 runs its single round; its broadcast to the stopped
        // peer fails but its own round still settles.
        participants[0].start().await.unwrap();
        wait_for_decision(&participants[..1]).await;

        assert_eq!(participants[1].snapshot().await, before);
        assert!(participants[1].start().await.is_err());
    }
}
