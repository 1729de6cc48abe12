use crate::card::{CardId, ReservedCard, CARD_TABLE};
use crate::combinatorics::{choose_distinct_gems, choose_gems};
use crate::deck::Decks;
use crate::gem::Gem;
use crate::gems::Gems;
use crate::mv::{CardLocation, Move};
use crate::nobles::{Noble, NobleId};
use crate::player::{Player, TurnPhase};
use log::debug;
use rand::seq::SliceRandom;
use rand::RngCore;

pub const WINNING_POINTS: u8 = 15;
pub const MAX_TURN_COUNT: u8 = 254;
pub const REVEALED_PER_TIER: usize = 4;

/// The complete, rule-exact position: decks, the revealed grid, nobles,
/// table stock, both seats, whose turn it is, and whether every reserved
/// slot currently names a concrete card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    decks: Decks,
    board: [[Option<CardId>; REVEALED_PER_TIER]; 3],
    nobles: [Option<NobleId>; 3],
    available: Gems,
    players: [Player; 2],
    next_player: usize,
    determinized: bool,
}

impl GameState {
    /// Deal a fresh two-player game: shuffled decks, four revealed cards per
    /// tier, three shuffled nobles, full table stock.
    pub fn new(rng: &mut dyn RngCore) -> GameState {
        let mut decks = Decks::new();
        let mut board = [[None; REVEALED_PER_TIER]; 3];
        for (tier_idx, row) in board.iter_mut().enumerate() {
            let tier = (tier_idx + 1) as u8;
            for slot in row.iter_mut() {
                *slot = decks.draw(tier, rng);
            }
        }

        let mut noble_ids: Vec<NobleId> = (0..Noble::all().len() as NobleId).collect();
        noble_ids.shuffle(rng);
        let nobles = [
            Some(noble_ids[0]),
            Some(noble_ids[1]),
            Some(noble_ids[2]),
        ];

        GameState {
            decks,
            board,
            nobles,
            available: Gems::start(2),
            players: [Player::new(), Player::new()],
            next_player: 0,
            determinized: true,
        }
    }

    pub fn next_player(&self) -> usize {
        self.next_player
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn board(&self) -> &[[Option<CardId>; REVEALED_PER_TIER]; 3] {
        &self.board
    }

    pub fn nobles(&self) -> &[Option<NobleId>; 3] {
        &self.nobles
    }

    pub fn available(&self) -> &Gems {
        &self.available
    }

    pub fn is_determinized(&self) -> bool {
        self.determinized
    }

    pub fn is_terminal(&self) -> bool {
        let (p0, p1) = (&self.players[0], &self.players[1]);
        let turns_level = p0.turn_count() == p1.turn_count();
        let someone_won = p0.total_points() >= WINNING_POINTS || p1.total_points() >= WINNING_POINTS;
        let capped = p0.turn_count() > MAX_TURN_COUNT || p1.turn_count() > MAX_TURN_COUNT;
        turns_level && (someone_won || capped)
    }

    pub fn winner(&self) -> Option<usize> {
        if !self.is_terminal() {
            return None;
        }
        let (p0, p1) = (&self.players[0], &self.players[1]);
        match p0.total_points().cmp(&p1.total_points()) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => {
                match p0.developments().total().cmp(&p1.developments().total()) {
                    std::cmp::Ordering::Greater => Some(0),
                    std::cmp::Ordering::Less => Some(1),
                    std::cmp::Ordering::Equal => None,
                }
            }
        }
    }

    /// All legal moves for `next_player` in the current phase. Requires a
    /// determinized state.
    pub fn get_moves(&self) -> Vec<Move> {
        debug_assert!(
            self.determinized,
            "move enumeration requires a determinized state"
        );
        match self.players[self.next_player].phase() {
            TurnPhase::Action => {
                let mut moves = self.collect_moves();
                moves.extend(self.purchase_moves());
                moves.extend(self.reserve_moves());
                moves
            }
            TurnPhase::Return => self.return_moves(),
            TurnPhase::Noble => self.noble_moves(),
        }
    }

    fn collect_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        let nonempty = Gem::all_expect_gold()
            .into_iter()
            .filter(|&color| self.available[color] > 0)
            .count();
        let take_count = nonempty.min(3) as u32;
        if take_count > 0 {
            let combos = choose_distinct_gems(
                &mut self.available.clone(),
                &mut Gems::empty(),
                take_count,
            );
            moves.extend(combos.into_iter().map(Move::Collect));
        }

        for color in Gem::all_expect_gold() {
            if self.available[color] >= 4 {
                moves.push(Move::Collect(Gems::one(color) + Gems::one(color)));
            }
        }

        moves
    }

    fn purchase_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let player = &self.players[self.next_player];

        for (tier_idx, row) in self.board.iter().enumerate() {
            for (slot_idx, slot) in row.iter().enumerate() {
                if let Some(card_id) = slot {
                    if self.affordable(player, *card_id) {
                        moves.push(Move::Purchase {
                            location: CardLocation::Board {
                                tier: (tier_idx + 1) as u8,
                                slot: slot_idx as u8,
                            },
                            card: *card_id,
                        });
                    }
                }
            }
        }

        for (slot_idx, slot) in player.reserved().iter().enumerate() {
            if let Some(card_id) = slot.and_then(|rc| rc.card_id()) {
                if self.affordable(player, card_id) {
                    moves.push(Move::Purchase {
                        location: CardLocation::Hand { slot: slot_idx as u8 },
                        card: card_id,
                    });
                }
            }
        }

        moves
    }

    fn affordable(&self, player: &Player, card_id: CardId) -> bool {
        let card = CARD_TABLE[card_id as usize];
        let demand = Gems::gold_demand(player.developments(), player.gems(), &card.cost().to_gems());
        demand <= player.gems()[Gem::Gold] as u32
    }

    fn reserve_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let player = &self.players[self.next_player];
        if !player.has_free_reserve_slot() {
            return moves;
        }

        for (tier_idx, row) in self.board.iter().enumerate() {
            for (slot_idx, slot) in row.iter().enumerate() {
                if let Some(card_id) = slot {
                    moves.push(Move::ReserveFaceUp {
                        tier: (tier_idx + 1) as u8,
                        slot: slot_idx as u8,
                        card: *card_id,
                    });
                }
            }
        }

        for tier in 1..=3u8 {
            if !self.decks.deck(tier).is_empty() {
                moves.push(Move::ReserveFaceDown { tier });
            }
        }

        moves
    }

    fn return_moves(&self) -> Vec<Move> {
        let player = &self.players[self.next_player];
        let overage = player.gem_count() as i32 - 10;
        debug_assert!(
            overage > 0,
            "return phase entered without exceeding the gem cap"
        );

        let mut held_colors = Gems::empty();
        for color in Gem::all_expect_gold() {
            held_colors[color] = player.gems()[color];
        }

        choose_gems(&mut held_colors, &mut Gems::empty(), overage as u32)
            .into_iter()
            .map(Move::Return)
            .collect()
    }

    fn noble_moves(&self) -> Vec<Move> {
        let player = &self.players[self.next_player];
        let catalog = Noble::all();
        self.nobles
            .iter()
            .filter_map(|slot| *slot)
            .filter(|&id| catalog[id as usize].is_attracted_to(player.developments()))
            .map(Move::Noble)
            .collect()
    }

    /// Apply `mv` and drive the turn-phase machine forward.
    pub fn do_move(&mut self, mv: &Move, rng: &mut dyn RngCore) {
        debug_assert!(self.determinized, "move application requires a determinized state");
        match *mv {
            Move::Collect(gems) => self.apply_collect(gems),
            Move::Purchase { location, card } => self.apply_purchase(location, card, rng),
            Move::ReserveFaceUp { tier, slot, card } => self.apply_reserve_face_up(tier, slot, card, rng),
            Move::ReserveFaceDown { tier } => self.apply_reserve_face_down(tier, rng),
            Move::Noble(noble_id) => self.apply_noble(noble_id),
            Move::Return(gems) => self.apply_return(gems),
        }
        debug_assert!(self.gems_conserved(), "gem conservation violated by {mv:?}");
        let phase_before = self.players[self.next_player].phase();
        self.advance_phase();
        debug!("applied {mv:?}, phase {phase_before:?} -> next player {}", self.next_player);
    }

    fn apply_collect(&mut self, taken: Gems) {
        let total = taken.total();
        debug_assert!(total <= 3, "collect of {total} exceeds the per-turn cap");
        for color in Gem::all_expect_gold() {
            let count = taken[color];
            debug_assert!(count <= 2, "collect slot {color:?} took {count}, max is 2");
            if count == 2 {
                debug_assert!(
                    self.available[color] >= 4,
                    "double take of {color:?} requires table stock >= 4"
                );
            }
        }
        self.available -= taken;
        self.players[self.next_player].add_gems(taken);
    }

    fn apply_purchase(&mut self, location: CardLocation, card_id: CardId, rng: &mut dyn RngCore) {
        let card = CARD_TABLE[card_id as usize];
        let cost = card.cost().to_gems();
        let mover = self.next_player;

        let (developments, held) = {
            let player = &self.players[mover];
            (*player.developments(), *player.gems())
        };
        let residual = Gems::apply_discount(&cost, &developments);

        let mut spend = Gems::empty();
        for color in Gem::all_expect_gold() {
            spend[color] = residual[color].min(held[color]);
        }
        let shortfall: i8 = Gem::all_expect_gold()
            .iter()
            .map(|&color| residual[color] - spend[color])
            .sum();
        spend[Gem::Gold] = shortfall;

        self.players[mover].remove_gems(spend);
        self.players[mover].add_development(card.gem());
        self.players[mover].add_points(card.points());
        self.available += spend;

        match location {
            CardLocation::Board { tier, slot } => {
                let replacement = self.decks.draw(tier, rng);
                self.board[(tier - 1) as usize][slot as usize] = replacement;
            }
            CardLocation::Hand { .. } => {
                self.players[mover].remove_reserved(card_id);
            }
        }
    }

    fn apply_reserve_face_up(&mut self, tier: u8, slot: u8, card_id: CardId, rng: &mut dyn RngCore) {
        let replacement = self.decks.draw(tier, rng);
        self.board[(tier - 1) as usize][slot as usize] = replacement;
        self.players[self.next_player].reserve_face_up(card_id);
        self.transfer_gold_to_mover();
    }

    fn apply_reserve_face_down(&mut self, tier: u8, rng: &mut dyn RngCore) {
        let card_id = self
            .decks
            .draw(tier, rng)
            .expect("face-down reserve generated from an empty tier");
        self.players[self.next_player].reserve_face_down(card_id);
        self.transfer_gold_to_mover();
    }

    fn transfer_gold_to_mover(&mut self) {
        if self.available[Gem::Gold] > 0 {
            self.available -= Gems::one(Gem::Gold);
            self.players[self.next_player].add_gems(Gems::one(Gem::Gold));
        }
    }

    fn apply_noble(&mut self, noble_id: NobleId) {
        let slot = self
            .nobles
            .iter_mut()
            .find(|slot| **slot == Some(noble_id))
            .expect("attracted noble is not on the board");
        *slot = None;
        self.players[self.next_player].add_noble_points();
    }

    fn apply_return(&mut self, gems: Gems) {
        self.players[self.next_player].remove_gems(gems);
        self.available += gems;
    }

    fn advance_phase(&mut self) {
        let mover = self.next_player;
        let next_phase = match self.players[mover].phase() {
            TurnPhase::Action => {
                if self.players[mover].gem_count() > 10 {
                    Some(TurnPhase::Return)
                } else if self.any_noble_affordable(mover) {
                    Some(TurnPhase::Noble)
                } else {
                    None
                }
            }
            TurnPhase::Return => {
                if self.any_noble_affordable(mover) {
                    Some(TurnPhase::Noble)
                } else {
                    None
                }
            }
            TurnPhase::Noble => None,
        };

        match next_phase {
            Some(phase) => self.players[mover].set_phase(phase),
            None => self.end_turn(mover),
        }
    }

    fn any_noble_affordable(&self, seat: usize) -> bool {
        let catalog = Noble::all();
        self.nobles
            .iter()
            .filter_map(|slot| *slot)
            .any(|id| catalog[id as usize].is_attracted_to(self.players[seat].developments()))
    }

    fn end_turn(&mut self, mover: usize) {
        self.players[mover].advance_turn();
        self.players[mover].set_phase(TurnPhase::Action);
        self.next_player = 1 - mover;
    }

    fn gems_conserved(&self) -> bool {
        let mut total = self.available;
        for player in &self.players {
            total += *player.gems();
        }
        total == Gems::start(2)
    }

    /// Observe the position as `observer` sees it: the opponent's face-down
    /// reservations become hidden tier tokens, and their identities are
    /// returned to the matching deck.
    pub fn mask(&self, observer: usize) -> GameState {
        let mut masked = self.clone();
        let opponent = 1 - observer;
        let returned = masked.players[opponent].mask_reserved();
        for card_id in returned {
            let tier = CARD_TABLE[card_id as usize].tier();
            masked.decks.deck_mut(tier).insert(card_id);
        }
        masked.determinized = !masked
            .players
            .iter()
            .any(|player| player.reserved().iter().flatten().any(ReservedCard::is_hidden));
        masked
    }

    /// Replace every hidden token with a fresh random draw from its tier,
    /// producing a concrete state consistent with the current information
    /// set.
    pub fn determinize(&mut self, rng: &mut dyn RngCore) {
        for seat in 0..2 {
            for slot_idx in 0..3 {
                let tier = match self.players[seat].reserved()[slot_idx] {
                    Some(ReservedCard::Hidden(tier)) => Some(tier),
                    _ => None,
                };
                if let Some(tier) = tier {
                    let card_id = self
                        .decks
                        .draw(tier, rng)
                        .expect("tier deck exhausted during determinization");
                    self.players[seat].reserved_mut()[slot_idx] = Some(ReservedCard::FaceDown(card_id));
                }
            }
        }
        self.determinized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deterministic_setup_deals_a_full_board() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = GameState::new(&mut rng);

        assert!(state.next_player() == 0 || state.next_player() == 1);
        for row in state.board() {
            assert_eq!(row.iter().filter(|c| c.is_some()).count(), 4);
        }
        assert_eq!(state.nobles().iter().filter(|n| n.is_some()).count(), 3);
        assert_eq!(*state.available(), Gems::start(2));
    }

    #[test]
    fn collect_round_trip_ends_the_turn() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = GameState::new(&mut rng);
        let mover = state.next_player();

        let mut take = Gems::empty();
        take[Gem::Onyx] = 1;
        take[Gem::Sapphire] = 1;
        take[Gem::Emerald] = 1;
        state.do_move(&Move::Collect(take), &mut rng);

        assert_eq!(*state.players()[mover].gems(), take);
        assert_eq!(state.available()[Gem::Onyx], 3);
        assert_eq!(state.available()[Gem::Sapphire], 3);
        assert_eq!(state.available()[Gem::Emerald], 3);
        assert_ne!(state.next_player(), mover);
    }

    #[test]
    fn forced_return_offers_only_return_moves() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut state = GameState::new(&mut rng);
        let mover = state.next_player();

        let mut held = Gems::empty();
        held[Gem::Onyx] = 3;
        held[Gem::Sapphire] = 3;
        held[Gem::Emerald] = 3;
        held[Gem::Ruby] = 2;
        state.players[mover].add_gems(held);
        state.players[mover].set_phase(TurnPhase::Return);

        let moves = state.get_moves();
        assert_eq!(moves.len(), 4, "one return move per held color");
        for mv in moves {
            match mv {
                Move::Return(gems) => assert_eq!(gems.total(), 1),
                other => panic!("expected only Return moves, got {other:?}"),
            }
        }
    }

    #[test]
    fn mask_then_determinize_consumes_exactly_one_deck_card() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = GameState::new(&mut rng);
        state
            .players
            .get_mut(0)
            .unwrap()
            .reserve_face_down(CARD_TABLE.iter().find(|c| c.tier() == 2).unwrap().id());

        let masked = state.mask(1);
        assert!(!masked.is_determinized());
        let tier_two_before = masked.decks.deck(2).remaining();

        let mut determinized = masked.clone();
        determinized.determinize(&mut rng);
        assert!(determinized.is_determinized());
        assert_eq!(determinized.decks.deck(2).remaining(), tier_two_before - 1);
    }
}
