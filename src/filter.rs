//! # Eligibility Filter
//!
//! Builds the candidate pool for one requester: everyone at the requester's
//! active event, minus the requester, minus accepted and rejected
//! connections. The exclusions are plain set differences and commute.

use hashbrown::HashSet;
use tracing::debug;

use crate::model::*;
use crate::storage::ProfileStore;
use crate::{Error, Result};

/// A participant that survived the filter, with the event it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateContext {
    pub participant: Participant,
    pub event: EventId,
}

impl CandidateContext {
    pub fn id(&self) -> ParticipantId {
        self.participant.id
    }
}

/// The requester and their candidates, in store enumeration order.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    pub requester: Participant,
    /// The event the pool was drawn from. `None` when the requester is not
    /// matchable.
    pub event: Option<EventId>,
    pub candidates: Vec<CandidateContext>,
}

impl CandidatePool {
    fn empty(requester: Participant) -> Self {
        Self { requester, event: None, candidates: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.candidates.iter().map(CandidateContext::id)
    }
}

/// Select the candidates `requester` may be matched with.
///
/// Fails with `Error::NotFound` only when the requester does not exist.
/// A requester without an active event or with an incomplete profile gets
/// an empty pool.
#[tracing::instrument(skip_all, fields(requester = %requester))]
pub async fn select_candidates<S: ProfileStore>(store: &S, requester: ParticipantId) -> Result<CandidatePool> {
    let participant = store
        .find_participant(requester)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Participant {requester}")))?;

    let Some(event) = participant.active_event else {
        debug!("requester has no active event");
        return Ok(CandidatePool::empty(participant));
    };
    if !participant.profile_complete {
        debug!("requester profile is incomplete");
        return Ok(CandidatePool::empty(participant));
    }

    let mut excluded: HashSet<ParticipantId> = store.find_accepted_connections(requester).await?;
    excluded.extend(store.find_rejected_connections(requester).await?);
    excluded.insert(requester);

    let candidates: Vec<CandidateContext> = store
        .find_active_event_participants(event)
        .await?
        .into_iter()
        .filter(|p| !excluded.contains(&p.id))
        .map(|participant| CandidateContext { participant, event })
        .collect();

    debug!(%event, candidates = candidates.len(), excluded = excluded.len() - 1, "selected candidates");
    Ok(CandidatePool { requester: participant, event: Some(event), candidates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn seed(store: &MemoryStore, id: u64, event: Option<u64>) {
        store.insert_participant(
            Participant::new(ParticipantId(id))
                .with_profile_complete(true)
                .with_active_event(event.map(EventId)),
        );
    }

    fn ids(pool: &CandidatePool) -> Vec<u64> {
        pool.ids().map(|id| id.0).collect()
    }

    #[tokio::test]
    async fn test_unknown_requester_is_not_found() {
        let store = MemoryStore::new();
        let err = select_candidates(&store, ParticipantId(1)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_same_event_only_and_self_excluded() {
        let store = MemoryStore::new();
        seed(&store, 1, Some(10));
        seed(&store, 2, Some(10));
        seed(&store, 3, Some(11));
        seed(&store, 4, None);
        seed(&store, 5, Some(10));

        let pool = select_candidates(&store, ParticipantId(1)).await.unwrap();
        assert_eq!(ids(&pool), vec![2, 5]);
        assert_eq!(pool.event, Some(EventId(10)));
    }

    #[tokio::test]
    async fn test_no_active_event_gives_empty_pool() {
        let store = MemoryStore::new();
        seed(&store, 1, None);
        seed(&store, 2, Some(10));

        let pool = select_candidates(&store, ParticipantId(1)).await.unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.event, None);
    }

    #[tokio::test]
    async fn test_incomplete_profile_gives_empty_pool() {
        let store = MemoryStore::new();
        seed(&store, 1, Some(10));
        seed(&store, 2, Some(10));
        store.set_profile_complete(ParticipantId(1), false).unwrap();

        let pool = select_candidates(&store, ParticipantId(1)).await.unwrap();
        assert!(pool.is_empty());
    }

    #[tokio::test]
    async fn test_connections_excluded_either_direction() {
        let store = MemoryStore::new();
        for id in 1..=6 {
            seed(&store, id, Some(10));
        }
        store.connect(ParticipantId(1), ParticipantId(2), ConnectionStatus::Accepted).unwrap();
        store.connect(ParticipantId(3), ParticipantId(1), ConnectionStatus::Accepted).unwrap();
        store.connect(ParticipantId(4), ParticipantId(1), ConnectionStatus::Rejected).unwrap();
        // Pending and requested connections do not exclude
        store.connect(ParticipantId(1), ParticipantId(5), ConnectionStatus::Requested).unwrap();
        store.connect(ParticipantId(6), ParticipantId(1), ConnectionStatus::Pending).unwrap();

        let pool = select_candidates(&store, ParticipantId(1)).await.unwrap();
        assert_eq!(ids(&pool), vec![5, 6]);
    }
}
