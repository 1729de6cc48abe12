use crate::card::CARD_TABLE;
use crate::game_state::GameState;
use crate::gem::Gem;
use crate::mv::{CardLocation, Move};
use crate::runner::View;
use std::fmt::Write as _;

fn format_gems_line(label: &str, gems: &crate::gems::Gems) -> String {
    format!(
        "{label}: onyx {} sapphire {} emerald {} ruby {} diamond {} gold {}",
        gems[Gem::Onyx], gems[Gem::Sapphire], gems[Gem::Emerald], gems[Gem::Ruby], gems[Gem::Diamond], gems[Gem::Gold]
    )
}

pub fn format_state(state: &GameState) -> String {
    let mut out = String::new();
    writeln!(out, "{}", format_gems_line("table", state.available())).ok();

    for (tier_idx, row) in state.board().iter().enumerate() {
        write!(out, "tier {}: ", tier_idx + 1).ok();
        for slot in row {
            match slot {
                Some(id) => {
                    let card = CARD_TABLE[*id as usize];
                    write!(out, "[#{} {:?} {}pt] ", id, card.gem(), card.points()).ok();
                }
                None => {
                    write!(out, "[--] ").ok();
                }
            }
        }
        writeln!(out).ok();
    }

    write!(out, "nobles: ").ok();
    for slot in state.nobles() {
        match slot {
            Some(id) => write!(out, "#{id} ").ok(),
            None => write!(out, "-- ").ok(),
        };
    }
    writeln!(out).ok();

    for (seat, player) in state.players().iter().enumerate() {
        writeln!(
            out,
            "player {}: {} pt, {}",
            seat + 1,
            player.total_points(),
            format_gems_line("held", player.gems())
        )
        .ok();
    }

    out
}

pub fn format_move(mv: &Move) -> String {
    match mv {
        Move::Collect(gems) => format!("collect {}", format_gems_line("take", gems)),
        Move::Purchase { location, card } => match location {
            CardLocation::Board { tier, slot } => format!("purchase board card #{card} (tier {tier} slot {slot})"),
            CardLocation::Hand { slot } => format!("purchase reserved card #{card} (hand slot {slot})"),
        },
        Move::ReserveFaceUp { tier, slot, card } => format!("reserve face-up card #{card} (tier {tier} slot {slot})"),
        Move::ReserveFaceDown { tier } => format!("reserve face-down from tier {tier}"),
        Move::Noble(id) => format!("attract noble #{id}"),
        Move::Return(gems) => format!("return {}", format_gems_line("gems", gems)),
    }
}

/// Prints each state and turn to a writer. `fair` suppresses state display
/// so a transcript can be compared without leaking hidden information.
pub struct TextView<W: std::io::Write> {
    out: W,
    fair: bool,
}

impl<W: std::io::Write> TextView<W> {
    pub fn new(out: W, fair: bool) -> TextView<W> {
        TextView { out, fair }
    }

    fn show_header(&mut self, text: &str) {
        writeln!(self.out, "--- {text} ---").ok();
    }
}

impl<W: std::io::Write> View for TextView<W> {
    fn show_state(&mut self, state: &GameState) {
        if !self.fair {
            write!(self.out, "{}", format_state(state)).ok();
        }
    }

    fn show_turn(&mut self, _state: &GameState, mv: &Move, seat: usize) {
        self.show_header(&format!("MOVE BY PLAYER {}", seat + 1));
        writeln!(self.out, "{}", format_move(mv)).ok();
    }
}
