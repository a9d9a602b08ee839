//! Athena's Towers - command line
//!
//! Play the tower game in a line-based loop, or roll dice.

use std::io::{self, BufRead, Write};

use athena_towers::core::{GameLogger, GameRng, VerbosityLevel};
use athena_towers::dice;
use athena_towers::games::athena::{AthenaTowers, GameError};
use athena_towers::rules::RulesEngine;
use athena_towers::zones::CardContainer;
use athena_towers::TableError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "athena")]
#[command(about = "Athena's Towers - a card game against a row of towers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on stdin
    Play {
        /// Set random seed for a reproducible deck
        #[arg(long)]
        seed: Option<u64>,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityLevel,
    },

    /// Roll dice once, e.g. `athena roll 2d6+3`
    Roll {
        /// Dice notation: [count]d<sides>[+modifier]
        notation: String,

        #[arg(long)]
        seed: Option<u64>,
    },
}

const HELP: &str = "\
commands:
  help             show this text
  new              deal a new round
  hand             list your hand
  act <hand> <tower>
                   attack a tower with a hand card
  observe          show health and towers
  roll <notation>  roll dice, e.g. roll 2d6+3
  log              show the event log
  log round        show this round's events
  quit             leave";

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, verbosity } => run_play(seed, verbosity),
        Commands::Roll { notation, seed } => {
            let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
            run_roll(&notation, &mut rng);
            Ok(())
        }
    }
}

fn run_roll(notation: &str, rng: &mut GameRng) {
    let result = dice::roll(notation, rng);
    if result.is_valid() {
        println!("{result}");
    } else {
        println!("Invalid dice notation '{notation}'");
    }
}

fn run_play(seed: Option<u64>, verbosity: VerbosityLevel) -> io::Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut game = match AthenaTowers::builder()
        .logger(GameLogger::with_verbosity(verbosity))
        .build(seed)
    {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(());
        }
    };
    let mut dice_rng = GameRng::new(seed).for_context("dice");

    println!("Athena's Towers (seed {seed}). Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["help"] => println!("{HELP}"),
            ["quit"] | ["exit"] => break,
            ["new"] => new_round(&mut game),
            ["hand"] => print_hand(&game),
            ["observe"] => observe(&game),
            ["act", hand, tower] => match (hand.parse(), tower.parse()) {
                (Ok(hand), Ok(tower)) => act(&mut game, hand, tower),
                _ => println!("usage: act <hand> <tower>"),
            },
            ["roll", notation] => run_roll(notation, &mut dice_rng),
            ["log"] => {
                for record in game.log().iter() {
                    println!("[{}] round {}: {}", record.sequence, record.round, record.event);
                }
            }
            ["log", "round"] => {
                for event in game.log().round(game.round()) {
                    println!("  {event}");
                }
            }
            _ => println!("Unknown command '{}'. Type 'help'.", line.trim()),
        }
    }

    Ok(())
}

fn new_round(game: &mut AthenaTowers) {
    let result = match game.new_state() {
        Err(GameError::Table(TableError::EmptyContainer(_))) => {
            let recycled = game.recycle_discards();
            println!("Deck ran low, shuffled {recycled} discards back in.");
            game.new_state()
        }
        other => other,
    };

    match result {
        Ok(()) => observe(game),
        Err(e) => println!("Error: {e}"),
    }
}

fn act(game: &mut AthenaTowers, hand: usize, tower: usize) {
    match game.act_on(hand, tower) {
        Ok(outcome) => {
            if outcome.destroyed {
                println!("Tower {tower} destroyed!");
            } else {
                println!("Tower {tower} holds. Health: {}", game.health());
            }
            match game.is_terminal() {
                Some(result) if result.is_victory() => {
                    println!("You win! Type 'new' to play again.");
                }
                Some(_) => println!("You lose. Type 'new' to play again."),
                None => {}
            }
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn print_hand(game: &AthenaTowers) {
    if game.hand().is_empty() {
        println!("Your hand is empty.");
        return;
    }
    for (i, card) in game.hand().iter().enumerate() {
        println!("  {i}: {card}");
    }
}

fn observe(game: &AthenaTowers) {
    println!(
        "Round {} ({}), health {}, {} of {} towers standing",
        game.round(),
        game.status(),
        game.health(),
        game.state().towers_standing(),
        game.towers().len()
    );
    for (i, tower) in game.towers().iter().enumerate() {
        println!("  tower {i}: {tower}");
    }
    if game.status().is_finished() {
        println!("Round over. Type 'new' to deal again.");
    }
    println!(
        "Deck {} / hand {} / discard {}",
        game.deck().len(),
        game.hand().len(),
        game.discard().len()
    );
}
