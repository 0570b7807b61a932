//! # matchme-engine: Event Participant Recommendations
//!
//! Given a participant and their active event, pick the other participants
//! at that event most likely to form a productive connection.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `ProfileStore` is the contract between the engine and
//!    whatever owns profiles and connections
//! 2. **Tables are data**: commitment/motivation matrices and the role→skill
//!    dictionary are an injected `CompatibilityTables`, not branches
//! 3. **Ineligible is not an error**: gates exclude candidates, only a
//!    missing requester fails a request
//! 4. **Stateless**: every call re-reads the store; no caches, no locks
//!
//! ## Pipeline
//!
//! ```text
//! requester ─► filter::select_candidates ─► scorer::Scorer::score (per candidate)
//!           ─► ranking::rank ─► Vec<ParticipantId> (≤ max_results)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use matchme_engine::{Recommender, ParticipantId};
//!
//! # async fn example() -> matchme_engine::Result<()> {
//! let engine = Recommender::in_memory();
//! // ... populate engine.store() ...
//! let ids = engine.recommend(ParticipantId(1)).await?;
//! for id in &ids {
//!     println!("recommended: {id}");
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod tables;
pub mod config;
pub mod filter;
pub mod scorer;
pub mod ranking;
pub mod presence;

use std::sync::Arc;

use tracing::{debug, info, warn};

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Participant, ParticipantId, EventId,
    EventBio, SkillBio, SkillBios, RoleSet,
    CommitmentLevel, Motivation, SkillLevel,
    Connection, ConnectionStatus,
};
pub use storage::{ProfileStore, MemoryStore};
pub use tables::CompatibilityTables;
pub use config::{EngineConfig, TieBreak};
pub use filter::{CandidateContext, CandidatePool};
pub use scorer::{MatchProfile, Scorer, Score, Verdict, Ineligibility};
pub use presence::PresenceRegistry;

// ============================================================================
// Top-level Recommender handle
// ============================================================================

/// The primary entry point. A `Recommender` wraps a profile store, the
/// scoring tables and the engine configuration.
///
/// It holds no per-request state, so one instance can serve concurrent
/// requests.
pub struct Recommender<S: ProfileStore> {
    store: S,
    scorer: Scorer,
    config: EngineConfig,
}

impl<S: ProfileStore> Recommender<S> {
    /// Create a Recommender with the built-in tables and default config.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            scorer: Scorer::default(),
            config: EngineConfig::default(),
        }
    }

    /// Swap in a different (validated) compatibility table.
    pub fn with_tables(mut self, tables: Arc<CompatibilityTables>) -> Result<Self> {
        tables.validate()?;
        self.scorer = Scorer::new(tables);
        Ok(self)
    }

    pub fn with_config(mut self, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The requester's candidate pool after self/connection exclusion.
    pub async fn select_candidates(&self, requester: ParticipantId) -> Result<CandidatePool> {
        filter::select_candidates(&self.store, requester).await
    }

    /// Score one pair as seen from `requester`'s active event.
    ///
    /// Fails only when either participant does not exist; missing bios and
    /// failed gates come back as `Verdict::Ineligible`.
    #[tracing::instrument(skip_all, fields(requester = %requester, candidate = %candidate))]
    pub async fn score_pair(&self, requester: ParticipantId, candidate: ParticipantId) -> Result<Verdict> {
        let a = self.find_participant(requester).await?;
        let b = self.find_participant(candidate).await?;
        let Some(event) = a.active_event else {
            return Ok(Verdict::Ineligible(Ineligibility::DifferentEvent));
        };

        let a = MatchProfile::load(&self.store, a, event).await?;
        let b = MatchProfile::load(&self.store, b, event).await?;
        Ok(self.scorer.score(&a, &b))
    }

    /// Ranked recommendations for `requester`, at most `max_results` IDs.
    ///
    /// A requester without an active event, with an incomplete profile or
    /// without bios gets an empty list. A store fault while loading one
    /// candidate drops that candidate and the rest are still evaluated.
    #[tracing::instrument(skip_all, fields(requester = %requester))]
    pub async fn recommend(&self, requester: ParticipantId) -> Result<Vec<ParticipantId>> {
        let pool = self.select_candidates(requester).await?;
        let Some(event) = pool.event else {
            return Ok(Vec::new());
        };

        let me = MatchProfile::load(&self.store, pool.requester.clone(), event).await?;
        if me.event_bio.is_none() || me.primary_skill().is_none() {
            debug!(%event, "requester has no event bio or skill bio");
            return Ok(Vec::new());
        }

        let total = pool.len();
        let mut scored = Vec::with_capacity(total);
        for candidate in pool.candidates {
            let id = candidate.id();
            let profile = match MatchProfile::load(&self.store, candidate.participant, candidate.event).await {
                Ok(profile) => profile,
                Err(e) => {
                    warn!(candidate = %id, error = %e, "skipping candidate");
                    continue;
                }
            };
            let verdict = self.scorer.score(&me, &profile);
            if let Verdict::Ineligible(reason) = verdict {
                debug!(candidate = %id, %reason, "ineligible");
            }
            scored.push((id, verdict));
        }

        let eligible = scored.iter().filter(|(_, v)| v.is_compatible()).count();
        let ranked = ranking::rank(scored, &self.config);
        info!(%event, candidates = total, eligible, returned = ranked.len(), "recommendations computed");
        Ok(ranking::into_ids(ranked))
    }

    /// Alias of [`Recommender::recommend`] under the caller-facing name.
    pub async fn get_recommendations(&self, requester: ParticipantId) -> Result<Vec<ParticipantId>> {
        self.recommend(requester).await
    }

    /// Hide `candidate` from `requester`'s future recommendations.
    ///
    /// Persisting dismissals is not implemented; this always returns
    /// `Error::Unsupported` so callers can tell it apart from success.
    pub async fn dismiss_recommendation(&self, requester: ParticipantId, candidate: ParticipantId) -> Result<()> {
        warn!(requester = %requester, candidate = %candidate, "dismiss requested but not supported");
        Err(Error::Unsupported("dismiss recommendation".into()))
    }

    async fn find_participant(&self, id: ParticipantId) -> Result<Participant> {
        self.store
            .find_participant(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Participant {id}")))
    }
}

/// In-memory recommender for testing and embedding.
impl Recommender<MemoryStore> {
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Operation not supported: {0}")]
    Unsupported(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid compatibility tables: {0}")]
    InvalidTables(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
