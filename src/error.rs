use derive_more::{Display, Error};

/// Semantic CLI validation failures clap's own parser can't catch.
#[derive(Debug, Display, Error)]
pub enum CliError {
    #[display(fmt = "benchmark thread count must be at least 1")]
    ZeroThreads,
    #[display(fmt = "benchmark game count must be at least 1")]
    ZeroGames,
}

/// An unparseable or out-of-range move index typed at the console prompt.
#[derive(Debug, Display, Error)]
pub enum InputError {
    #[display(fmt = "'{}' is not a number", _0)]
    NotANumber(#[error(not(source))] String),
    #[display(fmt = "{} is out of range, pick 0..{}", chosen, count)]
    OutOfRange { chosen: usize, count: usize },
}
