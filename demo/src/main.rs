// lints
#![warn(clippy::pedantic)]

mod patterns;

use std::env;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{bail, Context};
use hashlife_node::{Node, Population};
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

const DEFAULT_GENERATIONS: u64 = 10;
const DEFAULT_RANDOM_DIMENSION: u64 = 256;
const SEED_VAR: &str = "HASHLIFE_SEED";
const USAGE: &str = "usage: hashlife-demo [line|blinker|glider|random[:<dimension>]] [generations]";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Pattern {
    Line,
    Blinker,
    Glider,
    Random { dimension: u64 },
}

impl FromStr for Pattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "line" => Self::Line,
            "blinker" => Self::Blinker,
            "glider" => Self::Glider,
            "random" => Self::Random {
                dimension: DEFAULT_RANDOM_DIMENSION,
            },
            _ => match s.strip_prefix("random:") {
                Some(dimension) => Self::Random {
                    dimension: dimension
                        .parse()
                        .with_context(|| format!("invalid dimension '{dimension}'"))?,
                },
                None => bail!("unknown pattern '{s}'\n{USAGE}"),
            },
        })
    }
}

impl Pattern {
    fn build(self, seed: Option<u64>) -> anyhow::Result<Node> {
        let node = match self {
            Self::Line => patterns::horizontal_line()?,
            Self::Blinker => patterns::blinker(),
            Self::Glider => patterns::glider(),
            Self::Random { dimension } => match seed {
                Some(seed) => Node::random_space_seeded(dimension, seed)?,
                None => Node::random_space(dimension)?,
            },
        };
        Ok(node)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let mut args = env::args().skip(1);
    let pattern: Pattern = args.next().as_deref().unwrap_or("line").parse()?;
    let generations = match args.next() {
        Some(generations) => generations
            .parse()
            .with_context(|| format!("invalid generation count '{generations}'\n{USAGE}"))?,
        None => DEFAULT_GENERATIONS,
    };
    if let Some(extra) = args.next() {
        bail!("unexpected argument '{extra}'\n{USAGE}");
    }
    let seed = env::var(SEED_VAR)
        .ok()
        .map(|seed| seed.parse::<u64>())
        .transpose()
        .with_context(|| format!("{SEED_VAR} must be an unsigned integer"))?;

    info!(?pattern, generations, ?seed, "starting");
    let space = pattern.build(seed)?;
    run(space, generations);
    Ok(())
}

fn run(mut space: Node, generations: u64) {
    println!(
        "start: dimension {} population {}",
        space.dimension(),
        space.population()
    );
    print_small(&space);

    Node::reset_cache_stats();
    let start = Instant::now();
    for _ in 0..generations {
        space = space.advance(1);
    }
    let elapsed = start.elapsed();

    println!("{generations} generations in {elapsed:?}");
    println!(
        "end: dimension {} population {}",
        space.dimension(),
        space.population()
    );
    print_small(&space);

    let stats = Node::cache_stats();
    println!(
        "cache: {} nodes, {} hits, {} misses",
        stats.nodes, stats.hits, stats.misses
    );
    println!(
        "next: {} calls, {} misses, {} new leaves",
        stats.next_calls, stats.next_misses, stats.new_leaves
    );

    let kept = space.garbage_collect();
    println!("garbage collection kept {kept} of {} nodes", stats.nodes);
}

fn print_small(space: &Node) {
    if space.dimension() <= Node::MAX_RENDER_DIMENSION {
        print!("{space:#}");
    }
}
