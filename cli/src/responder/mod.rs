//! # Healthbot Responder
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! Turns one utterance into one reply by keyword matching against the
//! knowledge base:
//!
//! 1. Lowercase the utterance.
//! 2. Every entry with at least one keyword contained in the lowercased
//!    utterance contributes *all* of its responses to a candidate pool, in
//!    knowledge base order. Responses are not de-duplicated and entries are
//!    not ranked.
//! 3. A non-empty pool yields `min(3, pool size)` responses sampled uniformly
//!    without replacement, joined with newlines.
//! 4. An empty pool yields [`FALLBACK_RESPONSE`].
//!
//! The responder holds no state between calls. It borrows the knowledge base
//! rather than owning it, so one loaded knowledge base can back several
//! responders.
//!
//! ## Examples
//!
//! ```rust
//! use healthbot::knowledge::KnowledgeBase;
//! use healthbot::responder::{Responder, FALLBACK_RESPONSE};
//!
//! let kb = KnowledgeBase::from_pairs([(vec!["headache"], vec!["Drink water", "Rest"])]).unwrap();
//! let responder = Responder::new(&kb);
//!
//! assert_eq!(responder.respond("I feel great"), FALLBACK_RESPONSE);
//! assert_eq!(responder.respond("HEADACHE").lines().count(), 2);
//! ```
//!
use crate::knowledge::KnowledgeBase;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Reply used when no entry matches the utterance.
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I don't have information on that. Please consult a doctor.";

/// Upper bound on the number of response lines in one reply.
pub const MAX_RESPONSES: usize = 3;

/// Selects replies for utterances from a borrowed knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct Responder<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> Responder<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    /// # Respond (`respond`)
    ///
    /// Answers an utterance, sampling with the thread-local RNG. Repeated calls
    /// with the same utterance may return different subsets of the pool.
    /// Never fails; unmatched input gets [`FALLBACK_RESPONSE`].
    pub fn respond(&self, utterance: &str) -> String {
        self.respond_with(utterance, &mut rand::thread_rng())
    }

    /// Same as [`respond`](Self::respond) but samples with the given RNG.
    pub fn respond_with<R: Rng + ?Sized>(&self, utterance: &str, rng: &mut R) -> String {
        let pool = self.candidate_pool(utterance);
        if pool.is_empty() {
            debug!("No entry matched utterance; returning fallback");
            return FALLBACK_RESPONSE.to_string();
        }

        let picked: Vec<&str> = pool
            .choose_multiple(rng, MAX_RESPONSES.min(pool.len()))
            .copied()
            .collect();
        debug!(
            "Sampled {} of {} pooled responses",
            picked.len(),
            pool.len()
        );
        picked.join("\n")
    }

    /// Indices of the entries triggered by `utterance`, in knowledge base order.
    ///
    /// Deterministic: the same utterance always triggers the same entries.
    pub fn matching_entries(&self, utterance: &str) -> Vec<usize> {
        let normalized = utterance.to_lowercase();
        self.kb
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_triggered_by(&normalized))
            .map(|(index, _)| index)
            .collect()
    }

    /// All responses of all triggered entries, before sampling.
    pub fn candidate_pool(&self, utterance: &str) -> Vec<&'kb str> {
        let normalized = utterance.to_lowercase();
        self.kb
            .entries()
            .iter()
            .filter(|entry| entry.is_triggered_by(&normalized))
            .flat_map(|entry| entry.responses().iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn headache_kb() -> KnowledgeBase {
        KnowledgeBase::from_pairs([(
            vec!["headache"],
            vec!["Drink water", "Rest", "See a doctor"],
        )])
        .unwrap()
    }

    fn sorted_lines(reply: &str) -> Vec<&str> {
        let mut lines: Vec<&str> = reply.lines().collect();
        lines.sort_unstable();
        lines
    }

    #[test]
    fn returns_every_response_when_pool_has_three() {
        let kb = headache_kb();
        let responder = Responder::new(&kb);

        let reply = responder.respond("I have a headache");
        assert_eq!(sorted_lines(&reply), ["Drink water", "Rest", "See a doctor"]);
    }

    #[test]
    fn fallback_when_nothing_matches() {
        let kb = headache_kb();
        let responder = Responder::new(&kb);

        assert_eq!(responder.respond("I feel great"), FALLBACK_RESPONSE);
        assert_eq!(responder.respond(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let kb = headache_kb();
        let responder = Responder::new(&kb);

        assert_eq!(
            responder.candidate_pool("HEADACHE"),
            responder.candidate_pool("headache")
        );
        assert_eq!(responder.matching_entries("My HeadAche is back"), [0]);
    }

    #[test]
    fn never_more_lines_than_pool() {
        let kb = KnowledgeBase::from_pairs([(vec!["cough"], vec!["Honey and lemon"])]).unwrap();
        let responder = Responder::new(&kb);

        assert_eq!(responder.respond("bad cough"), "Honey and lemon");
    }

    #[test]
    fn caps_reply_at_three_lines() {
        let kb = KnowledgeBase::from_pairs([
            (vec!["fever"], vec!["a", "b", "c"]),
            (vec!["cough"], vec!["d", "e", "f"]),
        ])
        .unwrap();
        let responder = Responder::new(&kb);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let reply = responder.respond_with("fever and cough", &mut rng);
            let lines: Vec<&str> = reply.lines().collect();
            assert_eq!(lines.len(), MAX_RESPONSES);
            // Sampling is without replacement.
            let mut unique = lines.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), lines.len());
            assert!(lines.iter().all(|l| ["a", "b", "c", "d", "e", "f"].contains(l)));
        }
    }

    #[test]
    fn pools_all_matching_entries_in_order_without_dedup() {
        let kb = KnowledgeBase::from_pairs([
            (vec!["sleep"], vec!["Rest", "No screens"]),
            (vec!["diet"], vec!["Eat vegetables"]),
            (vec!["tired", "sleep"], vec!["Rest"]),
        ])
        .unwrap();
        let responder = Responder::new(&kb);

        assert_eq!(responder.matching_entries("i can't sleep"), [0, 2]);
        assert_eq!(
            responder.candidate_pool("i can't sleep"),
            ["Rest", "No screens", "Rest"]
        );
    }

    #[test]
    fn matching_set_is_stable_across_calls() {
        let kb = KnowledgeBase::builtin().unwrap();
        let responder = Responder::new(&kb);
        let first = responder.matching_entries("Headache and a fever");

        assert!(!first.is_empty());
        for _ in 0..10 {
            assert_eq!(responder.matching_entries("Headache and a fever"), first);
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let kb = KnowledgeBase::from_pairs([(
            vec!["stress"],
            vec!["a", "b", "c", "d", "e"],
        )])
        .unwrap();
        let responder = Responder::new(&kb);

        let one = responder.respond_with("stress", &mut StdRng::seed_from_u64(42));
        let two = responder.respond_with("stress", &mut StdRng::seed_from_u64(42));
        assert_eq!(one, two);
    }
}
