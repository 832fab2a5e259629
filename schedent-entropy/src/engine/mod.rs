// schedent-entropy/src/engine/mod.rs
//! The incremental entropy engine.
//!
//! Produces one entropy value per prefix of a labeled duration stream. Each
//! step adjusts the previous total using only the label whose weight changed,
//! instead of recomputing `-Σ p·log2(p)` over every label seen so far.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use libm::log2;

use crate::entropy::weighted_log_term;
use crate::{EntropyScore, Label};

/// The fold state carried from one step of the recurrence to the next.
///
/// Exactly three pieces of prior state feed each step: the running weight,
/// the previous step's entropy and the per-label cumulative weights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntropyState {
    /// Sum of every weight absorbed so far.
    pub running_weight: f64,
    /// The entropy produced by the previous step.
    pub previous_entropy: EntropyScore,
    /// Cumulative weight per label. Absent labels weigh zero.
    pub label_weights: BTreeMap<Label, f64>,
}

impl EntropyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative weight recorded for `label`, zero if it was never seen.
    pub fn weight_of(&self, label: Label) -> f64 {
        self.label_weights.get(&label).copied().unwrap_or(0.0)
    }

    /// Absorbs one `(label, weight)` observation and returns the entropy of the
    /// stream including it.
    ///
    /// The first observation made while the running weight is still zero
    /// yields exactly `0.0`, sidestepping the `0/0` and `log2(0)` singularity.
    /// No input is rejected; degenerate weights flow through the formula.
    pub fn absorb(&mut self, label: Label, extra_weight: f64) -> EntropyScore {
        let new_total = self.running_weight + extra_weight;

        let entropy = if new_total == extra_weight {
            0.0
        } else {
            let label_weight = self.weight_of(label);
            let current_term = weighted_log_term(label_weight);
            let new_term = (label_weight + extra_weight) * log2(label_weight + extra_weight);
            let previous_sum =
                (log2(self.running_weight) - self.previous_entropy) * self.running_weight;

            log2(new_total) - (previous_sum - current_term + new_term) / new_total
        };

        self.running_weight = new_total;
        self.previous_entropy = entropy;
        *self.label_weights.entry(label).or_insert(0.0) += extra_weight;

        entropy
    }
}

/// Computes the entropy trace of an ordered stream of `(label, weight)` pairs.
///
/// The trace has one value per pair, and value `i` depends only on pairs
/// `0..=i`. The per-label table lives only for the duration of this call.
pub fn entropy_trace<I>(pairs: I) -> Vec<EntropyScore>
where
    I: IntoIterator<Item = (Label, f64)>,
{
    pairs
        .into_iter()
        .scan(EntropyState::new(), |state, (label, weight)| {
            Some(state.absorb(label, weight))
        })
        .collect()
}
