//! Deck construction.
//!
//! Builds the two aligned card columns for a round: terms in vocabulary
//! order (the fixed anchor column), definitions shuffled.

use crate::error::{DeckError, Result};
use crate::types::{Card, CardId, Role, VocabEntry};
use rand::Rng;
use std::collections::HashSet;

/// The full card set for one round.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    terms: Vec<Card>,
    definitions: Vec<Card>,
}

impl Deck {
    /// Build a deck from a vocabulary list.
    ///
    /// Emits one Term and one Definition card per entry. Term order
    /// follows the input; Definition order is shuffled with the supplied
    /// random source, so a seeded generator yields a reproducible layout.
    pub fn build<R: Rng>(vocabulary: &[VocabEntry], rng: &mut R) -> Result<Self> {
        if vocabulary.is_empty() {
            return Err(DeckError::EmptyVocabulary);
        }

        let mut seen = HashSet::new();
        for entry in vocabulary {
            if !seen.insert(entry.id) {
                return Err(DeckError::DuplicateEntry { id: entry.id });
            }
        }

        let terms = vocabulary
            .iter()
            .map(|entry| Card {
                card_id: CardId::term(entry.id),
                label: entry.term.clone(),
                icon: entry.icon.clone(),
                connected: false,
            })
            .collect();

        let mut definitions: Vec<Card> = vocabulary
            .iter()
            .map(|entry| Card {
                card_id: CardId::definition(entry.id),
                label: entry.definition.clone(),
                icon: None,
                connected: false,
            })
            .collect();
        fisher_yates(&mut definitions, rng);

        Ok(Self { terms, definitions })
    }

    /// Number of vocabulary entries (half the card count).
    pub fn pair_count(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[Card] {
        &self.terms
    }

    pub fn definitions(&self) -> &[Card] {
        &self.definitions
    }

    /// All cards, terms first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.terms.iter().chain(self.definitions.iter())
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        let column = match id.role {
            Role::Term => &self.terms,
            Role::Definition => &self.definitions,
        };
        column.iter().find(|card| card.card_id == id)
    }

    pub(crate) fn mark_connected(&mut self, id: CardId) {
        let column = match id.role {
            Role::Term => &mut self.terms,
            Role::Definition => &mut self.definitions,
        };
        if let Some(card) = column.iter_mut().find(|card| card.card_id == id) {
            card.connected = true;
        }
    }
}

/// Unbiased in-place shuffle: for i from the last index down to 1, swap
/// with a uniformly random index in `[0, i]`.
fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn vocabulary(n: i64) -> Vec<VocabEntry> {
        (1..=n)
            .map(|id| VocabEntry {
                id,
                term: format!("term {id}"),
                definition: format!("definition {id}"),
                icon: None,
            })
            .collect()
    }

    #[test]
    fn one_card_pair_per_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::build(&vocabulary(6), &mut rng).unwrap();

        assert_eq!(deck.cards().count(), 12);
        assert_eq!(deck.terms().len(), 6);
        assert_eq!(deck.definitions().len(), 6);

        let unique: HashSet<_> = deck.cards().map(|c| c.card_id).collect();
        assert_eq!(unique.len(), 12);

        for id in 1..=6 {
            assert!(deck.card(CardId::term(id)).is_some());
            assert!(deck.card(CardId::definition(id)).is_some());
        }
    }

    #[test]
    fn term_order_is_stable() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::build(&vocabulary(8), &mut rng).unwrap();
        let order: Vec<_> = deck.terms().iter().map(|c| c.entry()).collect();
        assert_eq!(order, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let deck = Deck::build(&vocabulary(20), &mut rng).unwrap();
        let mut entries: Vec<_> = deck.definitions().iter().map(|c| c.entry()).collect();
        entries.sort_unstable();
        assert_eq!(entries, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_under_a_seed() {
        let order = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let deck = Deck::build(&vocabulary(12), &mut rng).unwrap();
            deck.definitions()
                .iter()
                .map(|c| c.entry())
                .collect::<Vec<_>>()
        };
        assert_eq!(order(42), order(42));
        assert_ne!(order(42), order(43));
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Deck::build(&[], &mut rng),
            Err(DeckError::EmptyVocabulary)
        ));
    }

    #[test]
    fn duplicate_entry_id_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut vocab = vocabulary(3);
        vocab.push(vocab[0].clone());
        assert!(matches!(
            Deck::build(&vocab, &mut rng),
            Err(DeckError::DuplicateEntry { id: 1 })
        ));
    }
}
