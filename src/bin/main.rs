use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use splendor_mcts::config::{Args, Mode};
use splendor_mcts::error::CliError;
use splendor_mcts::game_state::GameState;
use splendor_mcts::mcts::{MctsOptions, MonteCarloTreeSearch};
use splendor_mcts::runner::{Runner, TwoAgents};
use splendor_mcts::view::TextView;
use std::process::ExitCode;
use std::sync::Mutex;
use std::thread;

fn mcts_options(args: &Args) -> MctsOptions {
    MctsOptions {
        timeout_seconds: args.timeout_seconds,
        upper_confidence_bound: args.upper_confidence_bound,
        trace_history: args.trace_history,
        debug: args.debug,
        sims_per_rollout: args.sims_per_rollout,
        rollout_policy: args.rollout_policy,
    }
}

fn run_play(args: &Args) {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut state = GameState::new(&mut rng);
    let mut mcts1 = MonteCarloTreeSearch::new(mcts_options(args));
    let mut mcts2 = MonteCarloTreeSearch::new(mcts_options(args));
    let mut view = TextView::new(std::io::stdout(), false);

    let mut runner = Runner::new();
    runner.add_view(&mut view);
    let winner = runner.run_game(&mut state, &mut TwoAgents(&mut mcts1, &mut mcts2), &mut rng);
    match winner {
        Some(seat) => println!("player {} wins", seat + 1),
        None => println!("draw"),
    }
}

#[derive(Default)]
struct Tally {
    player_one_wins: usize,
    player_two_wins: usize,
    draws: usize,
}

fn run_benchmark(args: &Args) -> Result<(), CliError> {
    if args.threads == 0 {
        return Err(CliError::ZeroThreads);
    }
    if args.games == 0 {
        return Err(CliError::ZeroGames);
    }

    let tally = Mutex::new(Tally::default());
    let games_per_thread = args.games / args.threads;
    let seed = args.seed;

    thread::scope(|scope| {
        for worker in 0..args.threads {
            let tally = &tally;
            let options = mcts_options(args);
            scope.spawn(move || {
                let mut rng = match seed {
                    Some(base) => StdRng::seed_from_u64(base.wrapping_add(worker as u64)),
                    None => StdRng::from_entropy(),
                };

                for _ in 0..games_per_thread {
                    let mut state = GameState::new(&mut rng);
                    let mut mcts1 = MonteCarloTreeSearch::new(options.clone());
                    let mut mcts2 = MonteCarloTreeSearch::new(options.clone());
                    let mut runner = Runner::new();
                    let winner = runner.run_game(&mut state, &mut TwoAgents(&mut mcts1, &mut mcts2), &mut rng);

                    let mut tally = tally.lock().unwrap();
                    match winner {
                        Some(0) => tally.player_one_wins += 1,
                        Some(_) => tally.player_two_wins += 1,
                        None => tally.draws += 1,
                    }
                }
            });
        }
    });

    let tally = tally.lock().unwrap();
    info!(
        "benchmark complete: player one {} player two {} draws {}",
        tally.player_one_wins, tally.player_two_wins, tally.draws
    );
    println!(
        "player one: {} player two: {} draws: {}",
        tally.player_one_wins, tally.player_two_wins, tally.draws
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.mode {
        Mode::Play => {
            run_play(&args);
            Ok(())
        }
        Mode::Benchmark => run_benchmark(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
