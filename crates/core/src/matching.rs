//! Match evaluator
//!
//! Decides whether two face-up cards form a pair. Unknown ids never match.
//! Passing the same id twice resolves both lookups to one card and reports a
//! match; the session never flips a card twice, so gameplay cannot produce it.

use arrayvec::ArrayVec;

use crate::types::{Card, CardId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    pub is_match: bool,
    /// Both ids when matched, empty otherwise.
    pub matched_ids: ArrayVec<CardId, 2>,
}

impl MatchOutcome {
    fn no_match() -> Self {
        Self::default()
    }
}

pub fn evaluate_match(first: &CardId, second: &CardId, cards: &[Card]) -> MatchOutcome {
    let lookup = |id: &CardId| cards.iter().find(|c| &c.id == id);

    let (Some(a), Some(b)) = (lookup(first), lookup(second)) else {
        return MatchOutcome::no_match();
    };

    if !a.is_pair_of(b) {
        return MatchOutcome::no_match();
    }

    let mut matched_ids = ArrayVec::new();
    matched_ids.push(first.clone());
    matched_ids.push(second.clone());
    MatchOutcome {
        is_match: true,
        matched_ids,
    }
}

/// Evaluate a flipped set; anything other than exactly two ids is a no-match.
pub fn evaluate_flipped(flipped: &[CardId], cards: &[Card]) -> MatchOutcome {
    match flipped {
        [first, second] => evaluate_match(first, second, cards),
        _ => MatchOutcome::no_match(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PairableItem;
    use std::sync::Arc;

    fn cards() -> Vec<Card> {
        let dog = Arc::new(PairableItem::new("1", "Dog", "Kurī", "dog"));
        let cat = Arc::new(PairableItem::new("2", "Cat", "Ngeru", "cat"));
        vec![
            Card::new(CardId::for_item("1", 1), dog.clone()),
            Card::new(CardId::for_item("2", 1), cat.clone()),
            Card::new(CardId::for_item("1", 2), dog),
            Card::new(CardId::for_item("2", 2), cat),
        ]
    }

    #[test]
    fn test_pair_matches() {
        let outcome = evaluate_match(&"1-1".into(), &"1-2".into(), &cards());
        assert!(outcome.is_match);
        assert_eq!(
            outcome.matched_ids.as_slice(),
            &[CardId::from("1-1"), CardId::from("1-2")]
        );
    }

    #[test]
    fn test_different_items_do_not_match() {
        let outcome = evaluate_match(&"1-1".into(), &"2-1".into(), &cards());
        assert!(!outcome.is_match);
        assert!(outcome.matched_ids.is_empty());
    }

    #[test]
    fn test_unknown_id_is_soft_no_match() {
        let outcome = evaluate_match(&"1-1".into(), &"9-1".into(), &cards());
        assert_eq!(outcome, MatchOutcome::default());

        let outcome = evaluate_match(&"1-1".into(), &"1-2".into(), &[]);
        assert!(!outcome.is_match);
    }

    #[test]
    fn test_same_id_twice_reports_match() {
        let outcome = evaluate_match(&"2-1".into(), &"2-1".into(), &cards());
        assert!(outcome.is_match);
        assert_eq!(outcome.matched_ids.len(), 2);
    }

    #[test]
    fn test_evaluate_flipped_requires_two() {
        let cards = cards();
        assert!(!evaluate_flipped(&[], &cards).is_match);
        assert!(!evaluate_flipped(&[CardId::from("1-1")], &cards).is_match);
        assert!(evaluate_flipped(&[CardId::from("2-2"), CardId::from("2-1")], &cards).is_match);
    }
}
