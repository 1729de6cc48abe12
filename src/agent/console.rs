use crate::error::InputError;
use crate::game_state::GameState;
use crate::mv::Move;
use crate::runner::Agent;
use crate::view;
use log::warn;
use rand::RngCore;
use std::io::{self, Write};

/// A human player typed at a terminal: prints the state and numbered move
/// list, then loops on stdin until a valid index is entered.
pub struct ConsolePlayer {
    seat_id: usize,
}

impl ConsolePlayer {
    pub fn new() -> ConsolePlayer {
        ConsolePlayer { seat_id: 0 }
    }

    fn parse_choice(input: &str, move_count: usize) -> Result<usize, InputError> {
        let choice: usize = input
            .trim()
            .parse()
            .map_err(|_| InputError::NotANumber(input.trim().to_string()))?;
        if choice >= move_count {
            return Err(InputError::OutOfRange { chosen: choice, count: move_count });
        }
        Ok(choice)
    }
}

impl Default for ConsolePlayer {
    fn default() -> Self {
        ConsolePlayer::new()
    }
}

impl Agent for ConsolePlayer {
    fn on_setup(&mut self, _state: &GameState, seat_id: usize) {
        self.seat_id = seat_id;
    }

    fn on_turn(&mut self, state: &GameState, moves: &[Move], _rng: &mut dyn RngCore) -> Move {
        print!("{}", view::format_state(state));
        for (idx, mv) in moves.iter().enumerate() {
            println!("{idx}: {}", view::format_move(mv));
        }
        println!("You are player {}", self.seat_id + 1);

        loop {
            print!("Entry move choice #: ");
            io::stdout().flush().ok();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                warn!("failed to read a line from stdin, retrying");
                continue;
            }
            match Self::parse_choice(&line, moves.len()) {
                Ok(choice) => return moves[choice],
                Err(err) => println!("{err}"),
            }
        }
    }
}
