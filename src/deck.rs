use crate::card::{tier_offset, CardId, TIER_SIZES};
use rand::{Rng, RngCore};

/// A draw pile for one tier, backed by a bitmap over catalog indices local
/// to that tier. Bit `i` set means local index `i` (catalog id
/// `tier_offset(tier) + i`) is still in the deck. Equality is bitmap
/// equality: total, cheap, and independent of shuffle order, which is
/// exactly what the search tree's value-equality join needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Deck {
    bits: u64,
    tier: u8,
}

impl Deck {
    fn full(tier: u8) -> Deck {
        let size = TIER_SIZES[(tier - 1) as usize] as u32;
        let bits = if size == 64 { u64::MAX } else { (1u64 << size) - 1 };
        Deck { bits, tier }
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }

    pub fn remaining(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn contains(&self, card: CardId) -> bool {
        let idx = card - tier_offset(self.tier);
        (self.bits >> idx) & 1 == 1
    }

    /// Remove and return a uniformly random remaining card, or `None` if the
    /// deck is empty.
    pub fn draw(&mut self, rng: &mut dyn RngCore) -> Option<CardId> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        let target = rng.gen_range(0..remaining);
        let mut seen = 0u32;
        for idx in 0..64u32 {
            if (self.bits >> idx) & 1 == 1 {
                if seen == target {
                    self.bits &= !(1u64 << idx);
                    return Some(tier_offset(self.tier) + idx as CardId);
                }
                seen += 1;
            }
        }
        unreachable!("remaining count disagreed with bit scan")
    }

    /// Return a specific card to the deck (used when masking a face-down
    /// reservation back into the information set it came from).
    pub fn insert(&mut self, card: CardId) {
        debug_assert!(!self.contains(card), "card {card} already in deck");
        let idx = card - tier_offset(self.tier);
        self.bits |= 1u64 << idx;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decks {
    tiers: [Deck; 3],
}

impl Decks {
    pub fn new() -> Decks {
        Decks {
            tiers: [Deck::full(1), Deck::full(2), Deck::full(3)],
        }
    }

    pub fn deck(&self, tier: u8) -> &Deck {
        &self.tiers[(tier - 1) as usize]
    }

    pub fn deck_mut(&mut self, tier: u8) -> &mut Deck {
        &mut self.tiers[(tier - 1) as usize]
    }

    pub fn draw(&mut self, tier: u8, rng: &mut dyn RngCore) -> Option<CardId> {
        self.deck_mut(tier).draw(rng)
    }
}

impl Default for Decks {
    fn default() -> Self {
        Decks::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_tier_one_deck_has_forty_cards() {
        let decks = Decks::new();
        assert_eq!(decks.deck(1).remaining(), 40);
        assert_eq!(decks.deck(2).remaining(), 30);
        assert_eq!(decks.deck(3).remaining(), 20);
    }

    #[test]
    fn draw_then_insert_round_trips() {
        let mut decks = Decks::new();
        let mut rng = StdRng::seed_from_u64(7);
        let card = decks.draw(2, &mut rng).unwrap();
        assert_eq!(decks.deck(2).remaining(), 29);
        assert!(!decks.deck(2).contains(card));
        decks.deck_mut(2).insert(card);
        assert_eq!(decks.deck(2).remaining(), 30);
        assert!(decks.deck(2).contains(card));
    }

    #[test]
    fn exhausting_a_deck_returns_none() {
        let mut decks = Decks::new();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert!(decks.draw(3, &mut rng).is_some());
        }
        assert!(decks.draw(3, &mut rng).is_none());
    }
}
