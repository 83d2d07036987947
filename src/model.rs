//! Core data models for Flag Match.
//! Cards, picks and the two-slot selection buffer, plus deck construction.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Flag code shared by exactly two cards in the deck (e.g. "jp").
    pub identity: String,
    /// Face-up?
    pub visible: bool,
    /// Permanently resolved; never reverts within one game.
    pub matched: bool,
    /// Index into the board's ordered sequence, fixed after each shuffle.
    pub position: usize,
    /// Turn in which the card was last turned face-up; 0 when never.
    pub revealed_turn: u32,
}

impl Card {
    fn hidden(identity: &str, position: usize) -> Self {
        Self {
            identity: identity.to_string(),
            visible: false,
            matched: false,
            position,
            revealed_turn: 0,
        }
    }
}

/// A card chosen by the player, captured at pick time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub position: usize,
    pub identity: String,
}

/// Holds the pending picks of the current turn. Never holds more than two.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionBuffer {
    slots: Vec<Pick>,
}

impl SelectionBuffer {
    pub const CAPACITY: usize = 2;

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn first(&self) -> Option<&Pick> {
        self.slots.first()
    }

    /// Adds a pick. Returns the completed pair once the second slot is
    /// filled, leaving the buffer empty again.
    pub fn push(&mut self, pick: Pick) -> Option<(Pick, Pick)> {
        self.slots.push(pick);
        if self.slots.len() < Self::CAPACITY {
            return None;
        }
        let second = self.slots.pop()?;
        let first = self.slots.pop()?;
        Some((first, second))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Two hidden cards per identity, in identity order.
pub fn build_deck(identities: &[String]) -> Vec<Card> {
    identities
        .iter()
        .flat_map(|id| [id, id])
        .enumerate()
        .map(|(position, id)| Card::hidden(id, position))
        .collect()
}

/// Unbiased in-place Fisher–Yates: walks from the last index down to 1,
/// swapping each slot with a uniformly chosen index in `0..=i`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn deck_has_two_of_each_identity() {
        let deck = build_deck(&codes(&["au", "br", "ca"]));
        assert_eq!(deck.len(), 6);
        for id in ["au", "br", "ca"] {
            assert_eq!(deck.iter().filter(|c| c.identity == id).count(), 2);
        }
        assert!(deck.iter().all(|c| !c.visible && !c.matched));
        let positions: Vec<usize> = deck.iter().map(|c| c.position).collect();
        assert_eq!(positions, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn buffer_returns_pair_on_second_push() {
        let mut buf = SelectionBuffer::default();
        let a = Pick {
            position: 0,
            identity: "au".into(),
        };
        let b = Pick {
            position: 5,
            identity: "br".into(),
        };
        assert!(buf.push(a.clone()).is_none());
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.first(), Some(&a));
        let pair = buf.push(b.clone());
        assert_eq!(pair, Some((a, b)));
        assert!(buf.is_empty());
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..16).collect();
        fisher_yates(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a: Vec<u32> = (0..16).collect();
        let mut b = a.clone();
        fisher_yates(&mut a, &mut SmallRng::seed_from_u64(42));
        fisher_yates(&mut b, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        fisher_yates(&mut empty, &mut rng);
        let mut one = vec![9u8];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn shuffle_reaches_every_slot() {
        // Each element should land in every position over enough runs.
        let mut seen = [[false; 4]; 4];
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..500 {
            let mut items = [0usize, 1, 2, 3];
            fisher_yates(&mut items, &mut rng);
            for (slot, v) in items.iter().enumerate() {
                seen[*v][slot] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|s| *s)));
    }
}
