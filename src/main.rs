use anyhow::{anyhow, Result};
use clap::Parser;

use std::io::{stdin, stdout, Stdin, Write};
use std::time::Duration;

use connect4_minimax::board::Player;
use connect4_minimax::config::Config;
use connect4_minimax::game::{Game, Status};
use connect4_minimax::strategy::MinimaxStrategy;
use connect4_minimax::{arena, DEFAULT_SEARCH_DEPTH};

mod display;

#[derive(Debug, clap::Parser)]
#[clap(about = "Play Connect 4 against a minimax opponent")]
struct Args {
    /// Plies searched by the computer opponent
    #[clap(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u32,
    /// Pause before each computer move, in milliseconds
    #[clap(long, default_value_t = 500)]
    delay_ms: u64,
    /// Print the score of every candidate move
    #[clap(short, long)]
    verbose: bool,
    /// Instead of playing, pit the computer against random play for this many games
    #[clap(long)]
    arena: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config {
        search_depth: args.depth,
        think_delay: Duration::from_millis(args.delay_ms),
        ..Config::default()
    };
    config.validate()?;

    if let Some(games) = args.arena {
        println!(
            "Playing {} games, depth {} search against random moves",
            games, config.search_depth
        );
        let report = arena::run(games, config.search_depth, true)?;
        println!(
            "Search won {}, random won {}, {} drawn, {:.1} moves per game",
            report.searcher_wins,
            report.random_wins,
            report.draws,
            report.plies as f64 / report.games.max(1) as f64
        );
        return Ok(());
    }

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    config.ai_players = (
        ask_yes_no(&stdin, "Is player 1 AI controlled? y/n: ")?,
        ask_yes_no(&stdin, "Is player 2 AI controlled? y/n: ")?,
    );

    let mut strategy = MinimaxStrategy::new(config.search_depth).verbose(args.verbose);
    let mut game = Game::new();

    loop {
        play(&stdin, &config, &mut game, &mut strategy)?;

        if !ask_yes_no(&stdin, "Play again? y/n: ")? {
            break;
        }
        game.reset();
    }
    Ok(())
}

/// Runs one game to completion
fn play(stdin: &Stdin, config: &Config, game: &mut Game, strategy: &mut MinimaxStrategy) -> Result<()> {
    let mut last_move = None;

    loop {
        display::draw(game.board(), last_move)?;

        match game.status() {
            Status::InProgress { next } => {
                // AI player
                let result = if config.is_automated(next) {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    // pacing only, the search itself starts afterwards
                    std::thread::sleep(config.think_delay);

                    let result = game.request_automated_move(strategy);
                    if let Some(report) = strategy.last_report() {
                        println!(
                            "Best move: {}, score {}, {} positions searched in {:.1}ms",
                            report.column + 1,
                            report.score,
                            report.node_count,
                            report.elapsed.as_secs_f64() * 1000.0
                        );
                    }
                    result.map(|(column, _)| column)

                // human player
                } else {
                    print!("Player {} ({}) move input > ", next.number(), player_label(next));
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        return Err(anyhow!("input closed before the game finished"));
                    }

                    // columns are typed 1-indexed, 0 is reported as out of range
                    match input_str.trim().parse::<usize>() {
                        Ok(column) => {
                            let column = column.wrapping_sub(1);
                            game.submit_human_move(column).map(|_| column)
                        }
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                    }
                };

                match result {
                    Ok(column) => last_move = Some(column),
                    Err(err) => {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }

            // end states
            Status::Won(player) => {
                let who = if config.is_automated(player) { " (AI)" } else { "" };
                println!("Player {}{} wins!", player.number(), who);
                break;
            }
            Status::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    println!("Moves played: {}", game.history());
    Ok(())
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("input closed while waiting for an answer"));
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn player_label(player: Player) -> &'static str {
    match player {
        Player::One => "red",
        Player::Two => "yellow",
    }
}
