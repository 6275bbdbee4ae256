//! Line-of-sight demo on a random battlefield.
//!
//! Run: cargo run --bin battlefield -- [seed] [radius] [compat|bresenham]
//!
//! A shooter `@` stands in the middle of the map. Every destructible within
//! `radius` is checked for line of sight; visible ones are drawn as `*`.
//! Obstructions are logged to stderr.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use skirmish_core::{Point, Tile};
use skirmish_demos::{HEIGHT, Obstacle, WIDTH, random_battlefield, render};
use skirmish_traversal::{BattlefieldTraversal, SightRule, TraversalConfig};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    simplelog::TermLogger::init(
        LevelFilter::Info,
        simplelog::ConfigBuilder::new()
            .set_max_level(LevelFilter::Debug)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Error initialising logger")?;

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid seed {s:?}"))?,
        None => 42,
    };
    let radius: i32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid radius {s:?}"))?,
        None => 6,
    };
    let rule = match args.next().as_deref() {
        None | Some("compat") => SightRule::Compat,
        Some("bresenham") => SightRule::Bresenham,
        Some(other) => bail!("unknown sight rule {other:?}, expected compat or bresenham"),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = random_battlefield(&mut rng, WIDTH, HEIGHT, 18);
    let shooter = Point::new(WIDTH / 2, HEIGHT / 2);
    map.remove(shooter);

    let engine = BattlefieldTraversal::new(&map)
        .with_config(TraversalConfig::default().with_sight_rule(rule));

    let mut targets = Vec::new();
    engine.visit_adjacent(shooter, radius, &mut |p: Point, tile: Tile<'_, Obstacle>| {
        if let Tile::Destructible(o) = tile {
            targets.push((p, *o));
        }
    });

    let mut marks = HashMap::from([(shooter, '@')]);
    let mut visible = 0;
    for &(p, o) in &targets {
        if engine.has_line_of_sight(shooter, p) {
            marks.insert(p, '*');
            visible += 1;
            log::debug!("{o:?} at {p} is in sight");
        }
    }

    print!("{}", render(&map, &marks));
    println!(
        "rule {rule:?}, radius {radius}: {visible} of {} targets in sight",
        targets.len()
    );
    Ok(())
}
