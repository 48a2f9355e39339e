//! Checkers CLI
//!
//! Reconstruct moves between board snapshots, ask the lookahead engine for a
//! move, or run self-play games.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use checkers_cli::{
    board_to_json, load_board, logging, moves_to_json, parse_square, Config, GameConfig,
    GameOutcome, GameRunner,
};
use checkers_core::{
    play_path, reconstruct_with, recommend_with, Engine, LookaheadEngine, MatchPolicy,
    SearchLimits, Side,
};
use random_engine::RandomEngine;

fn print_usage() {
    println!("Checkers move analyser");
    println!();
    println!("Usage:");
    println!("  checkers analyse <from.json> <to.json> <side> [--strict] [--json]");
    println!("  checkers recommend <board.json> <side> [--depth D] [--json]");
    println!("  checkers apply <board.json> <side> <row,col> <row,col>... [--json]");
    println!("  checkers play [--white E] [--black E] [--turns N] [--depth D] [--seed S]");
    println!();
    println!("Global options:");
    println!("  --config <path>   configuration file (default: checkers.toml if present)");
    println!();
    println!("Sides: white (cells 1, 2), black (cells 3, 4)");
    println!("Engines:");
    println!("  lookahead     - Depth-bounded greedy lookahead (default)");
    println!("  random        - Uniformly random legal turn");
    println!();
    println!("Examples:");
    println!("  checkers analyse before.json after.json black");
    println!("  checkers recommend board.json white --depth 4 --json");
    println!("  checkers play --white random --turns 100 --seed 7");
}

/// Flags shared by the subcommands, parsed by hand.
#[derive(Debug, Default)]
struct Options {
    positional: Vec<String>,
    config: Option<PathBuf>,
    depth: Option<u8>,
    turns: Option<u32>,
    seed: Option<u64>,
    white: Option<String>,
    black: Option<String>,
    strict: bool,
    json: bool,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let mut value = || -> Result<&String> {
            i += 1;
            args.get(i).with_context(|| format!("{arg} needs a value"))
        };
        match arg {
            "--config" | "-c" => opts.config = Some(PathBuf::from(value()?)),
            "--depth" | "-d" => opts.depth = Some(value()?.parse().context("Bad --depth")?),
            "--turns" | "-t" => opts.turns = Some(value()?.parse().context("Bad --turns")?),
            "--seed" | "-s" => opts.seed = Some(value()?.parse().context("Bad --seed")?),
            "--white" => opts.white = Some(value()?.clone()),
            "--black" => opts.black = Some(value()?.clone()),
            "--strict" => opts.strict = true,
            "--json" => opts.json = true,
            _ if arg.starts_with("--") => bail!("Unknown option {arg}"),
            _ => opts.positional.push(arg.to_string()),
        }
        i += 1;
    }
    Ok(opts)
}

fn parse_side(text: &str) -> Result<Side> {
    Ok(text.parse::<Side>()?)
}

fn create_engine(spec: &str, limits: SearchLimits, seed: Option<u64>) -> Result<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "lookahead" | "greedy" => Ok(Box::new(LookaheadEngine::with_limits(limits))),
        "random" => Ok(Box::new(match seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        })),
        _ => bail!("Unknown engine: {spec}"),
    }
}

fn run_analyse(config: &Config, opts: &Options) -> Result<()> {
    let [from, to, side] = opts.positional.as_slice() else {
        bail!("analyse requires <from.json> <to.json> <side>");
    };
    let from = load_board(Path::new(from))?;
    let to = load_board(Path::new(to))?;
    let side = parse_side(side)?;
    let policy = if opts.strict {
        MatchPolicy::CompleteOnly
    } else {
        config.analysis.match_policy
    };

    let found = reconstruct_with(&from, &to, side, policy);
    if opts.json {
        println!("{}", moves_to_json(&found)?);
    } else if found.is_empty() {
        println!("No legal {side} turn explains this transition");
    } else {
        for mv in &found {
            println!("{mv}");
        }
    }
    Ok(())
}

fn run_recommend(config: &Config, opts: &Options) -> Result<()> {
    let [board, side] = opts.positional.as_slice() else {
        bail!("recommend requires <board.json> <side>");
    };
    let board = load_board(Path::new(board))?;
    let side = parse_side(side)?;
    let limits = SearchLimits::depth(opts.depth.unwrap_or(config.search.depth));

    let result = recommend_with(&board, side, limits)?;
    debug!(score = result.score, leaves = result.leaves, "search stats");
    if opts.json {
        println!("{}", moves_to_json(std::slice::from_ref(&result.best_move))?);
    } else {
        println!("{}", result.best_move);
    }
    Ok(())
}

fn run_apply(opts: &Options) -> Result<()> {
    let [board, side, squares @ ..] = opts.positional.as_slice() else {
        bail!("apply requires <board.json> <side> <row,col>...");
    };
    if squares.len() < 2 {
        bail!("apply needs at least an origin and one landing square");
    }
    let board = load_board(Path::new(board))?;
    let side = parse_side(side)?;
    let path = squares
        .iter()
        .map(|s| parse_square(s))
        .collect::<Result<Vec<_>>>()?;

    let turn = play_path(&board, &path, side)?;
    if opts.json {
        println!("{}", board_to_json(&turn.board)?);
    } else {
        println!("{}", turn.chain);
        println!("{}", turn.board);
    }
    Ok(())
}

fn run_play(config: &Config, opts: &Options) -> Result<()> {
    let limits = SearchLimits::depth(opts.depth.unwrap_or(config.search.depth));
    let seed = opts.seed.or(config.play.seed);
    let white_spec = opts.white.as_deref().unwrap_or("lookahead");
    let black_spec = opts.black.as_deref().unwrap_or("lookahead");

    let mut white = create_engine(white_spec, limits, seed)?;
    // Offset so two random engines sharing a seed do not mirror each other
    let mut black = create_engine(black_spec, limits, seed.map(|s| s.wrapping_add(1)))?;

    println!("=== Game: {} (white) vs {} (black) ===", white.name(), black.name());
    let runner = GameRunner::new(GameConfig {
        max_turns: opts.turns.unwrap_or(config.play.max_turns),
        verbose: true,
        ..Default::default()
    });
    let record = runner.play(white.as_mut(), black.as_mut())?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }
    for (i, turn) in record.turns.iter().enumerate() {
        println!("{:>3}. {:<5} {}", i + 1, turn.side, turn.text);
    }
    println!();
    println!("{}", record.final_board);
    match record.outcome {
        GameOutcome::Win(side) => println!("Result: {side} wins after {} turns", record.turns.len()),
        GameOutcome::Draw => println!("Result: draw after {} turns", record.turns.len()),
    }
    Ok(())
}

fn run(args: &[String]) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };
    if matches!(command.as_str(), "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let opts = parse_options(&args[1..])?;
    let config = Config::load_or_default(opts.config.as_deref())?;
    logging::init(&config.log.filter);
    debug!(?config, "configuration loaded");

    match command.as_str() {
        "analyse" | "analyze" => run_analyse(&config, &opts),
        "recommend" | "best" => run_recommend(&config, &opts),
        "apply" => run_apply(&opts),
        "play" => run_play(&config, &opts),
        _ => {
            print_usage();
            bail!("Unknown command: {command}")
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
