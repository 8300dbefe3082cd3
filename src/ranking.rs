use std::cmp::Ordering;

use tracing::debug;

use crate::zone::{RankedZone, ScoreWeights, Zone};

/// Orders zones by descending default score.
pub fn rank(zones: Vec<Zone>) -> Vec<Zone> {
    rank_with(zones, &ScoreWeights::default())
}

/// Orders zones by descending score under `weights`. Equal scores keep input order.
pub fn rank_with(mut zones: Vec<Zone>, weights: &ScoreWeights) -> Vec<Zone> {
    zones.sort_by(|a, b| descending(a.score_with(weights), b.score_with(weights)));
    debug!(zones = zones.len(), "ranked zones");
    zones
}

/// Higher scores first. NaN of either sign ranks above every number.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.total_cmp(&a),
    }
}

/// Numbered views of an already ranked sequence, starting at rank 1.
pub fn ranked_views(zones: &[Zone], weights: &ScoreWeights) -> Vec<RankedZone> {
    zones
        .iter()
        .enumerate()
        .map(|(index, zone)| zone.ranked(index + 1, weights))
        .collect()
}
