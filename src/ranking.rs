//! # Ranking & Selection
//!
//! Orders scored candidates and bounds the list. Scores stay internal: the
//! caller-facing result is IDs only.

use std::cmp::Ordering;

use crate::config::{EngineConfig, TieBreak};
use crate::model::ParticipantId;
use crate::scorer::Verdict;

/// A candidate that passed every gate, with its total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCandidate {
    pub id: ParticipantId,
    pub score: u32,
}

/// Keep compatible candidates, sort by score descending and truncate.
///
/// `scored` must be in store enumeration order; with
/// `TieBreak::Enumeration` that order survives among equal scores because
/// the sort is stable.
pub fn rank<I>(scored: I, config: &EngineConfig) -> Vec<RankedCandidate>
where
    I: IntoIterator<Item = (ParticipantId, Verdict)>,
{
    let mut ranked: Vec<RankedCandidate> = scored
        .into_iter()
        .filter_map(|(id, verdict)| {
            let score = verdict.score()?.total();
            (score >= config.min_score).then_some(RankedCandidate { id, score })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| match config.tie_break {
            TieBreak::IdAscending => a.id.cmp(&b.id),
            TieBreak::Enumeration => Ordering::Equal,
        })
    });
    ranked.truncate(config.max_results);
    ranked
}

/// Strip scores, keeping order.
pub fn into_ids(ranked: Vec<RankedCandidate>) -> Vec<ParticipantId> {
    ranked.into_iter().map(|r| r.id).collect()
}
