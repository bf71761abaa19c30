//! Terminal Game of Life runner (default binary).
//!
//! Seeds a simulation, then steps and redraws it at a fixed frame rate until
//! the requested number of generations has been shown or the user quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use term_life::config::{Cli, RunConfig, Seeding};
use term_life::core::Simulation;
use term_life::term::{should_quit, write_status, FramePacer, OutputMode, TerminalRenderer};

fn main() -> Result<()> {
    init_tracing();
    let config = Cli::parse().into_config()?;
    let mut sim = build_simulation(&config)?;

    info!(
        width = config.width,
        height = config.height,
        generations = config.generations,
        fps = config.fps,
        population = sim.population(),
        "starting animation"
    );

    let mode = if config.plain {
        OutputMode::Plain
    } else {
        OutputMode::Terminal
    };
    let mut term = TerminalRenderer::new(mode);
    term.enter()?;

    let result = run(&mut term, &mut sim, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    if result.is_ok() {
        info!(
            generation = sim.generation(),
            population = sim.population(),
            "animation finished"
        );
    }
    result
}

fn init_tracing() {
    // Frames go to stdout; keep diagnostics on stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_simulation(config: &RunConfig) -> Result<Simulation> {
    let sim = match config.seeding {
        Seeding::Entropy => Simulation::new(config.width, config.height)?,
        Seeding::Seed(seed) => Simulation::with_seed(config.width, config.height, seed)?,
        Seeding::Pattern(kind) => Simulation::with_pattern(config.width, config.height, kind)?,
    };
    Ok(sim)
}

fn run(term: &mut TerminalRenderer, sim: &mut Simulation, config: &RunConfig) -> Result<()> {
    let start = Instant::now();
    let mut pacer = FramePacer::new(config.frame_interval());
    let mut frame = String::with_capacity((config.width + 1) * config.height);
    let mut status = String::new();
    let mut shown = 0u32;

    while shown < config.generations {
        if pacer.frame_due(start.elapsed()) {
            sim.step();
            sim.render_into(&mut frame);
            if config.status {
                write_status(sim, &mut status);
            }
            term.draw(&frame, config.status.then_some(status.as_str()))?;
            shown += 1;
            continue;
        }

        let wait = pacer.remaining(start.elapsed());
        if term.is_interactive() {
            if wait_for_quit(wait)? {
                info!(generation = sim.generation(), "quit requested");
                return Ok(());
            }
        } else {
            std::thread::sleep(wait);
        }
    }

    debug!(frames = shown, elapsed_ms = start.elapsed().as_millis() as u64, "frame loop done");
    Ok(())
}

/// Wait up to `timeout` for a key press; true if it asks to quit.
fn wait_for_quit(timeout: Duration) -> Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(key.kind == KeyEventKind::Press && should_quit(key));
        }
    }
    Ok(false)
}
