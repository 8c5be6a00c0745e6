//! rshogi-referee: USI形式の指し手列を合法性を検査しながら再生し、終局状態を報告する

mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rshogi_rules::{Game, Move, Position, RuleConfig};

use report::Report;

#[derive(Parser, Debug)]
#[command(name = "rshogi-referee")]
#[command(author, version, about = "Replay USI moves and report the shogi game status", long_about = None)]
struct Args {
    /// SFEN of the starting position (default: hirate). "<sfen> moves ..." is accepted
    #[arg(short, long)]
    sfen: Option<String>,

    /// Rule thresholds as TOML (repetition_limit, impasse_threshold)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show all legal moves of the final position
    #[arg(short, long)]
    list: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Moves in USI notation (7g7f, 8h2b+, P*5e)
    moves: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RuleConfig::default(),
    };
    debug!("rules: {config:?}");

    let (position, mut moves) = parse_start(args.sfen.as_deref())?;
    moves.extend(args.moves.iter().cloned());

    let mut game = Game::from_position(position, config);
    for (i, usi) in moves.iter().enumerate() {
        let mv: Move = usi
            .parse()
            .with_context(|| format!("move {} '{usi}' is not valid USI notation", i + 1))?;
        let status = game
            .play(mv)
            .with_context(|| format!("move {} '{usi}' is illegal", i + 1))?;
        if status.is_over() {
            info!("after move {} '{usi}': {status:?}", i + 1);
        }
    }

    let report = Report::new(&game, args.list);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn init_logging(debug: bool) {
    use std::io::Write;
    let log_level = if debug { "debug" } else { "warn" };

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn load_config(path: &Path) -> Result<RuleConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// 開始局面と、SFEN に続けて書かれた指し手
fn parse_start(sfen: Option<&str>) -> Result<(Position, Vec<String>)> {
    let Some(input) = sfen else {
        return Ok((Position::new(), Vec::new()));
    };

    let (sfen, moves) = match input.split_once(" moves ") {
        Some((sfen, rest)) => (sfen, rest.split_whitespace().map(str::to_string).collect()),
        None => (input, Vec::new()),
    };
    let position =
        Position::from_sfen(sfen).with_context(|| format!("invalid SFEN '{sfen}'"))?;
    Ok((position, moves))
}
