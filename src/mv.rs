use crate::card::CardId;
use crate::gems::Gems;
use crate::nobles::NobleId;

/// Where a purchased card sits before it is bought: on the board (and thus
/// replaced by a fresh draw) or in the mover's own reserved hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardLocation {
    Board { tier: u8, slot: u8 },
    Hand { slot: u8 },
}

/// The six kinds of move a `GameState` can generate and apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Collect(Gems),
    Purchase { location: CardLocation, card: CardId },
    ReserveFaceUp { tier: u8, slot: u8, card: CardId },
    ReserveFaceDown { tier: u8 },
    Noble(NobleId),
    Return(Gems),
}
