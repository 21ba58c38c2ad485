#![deny(warnings)]

//! Headless ECS host running the calculators as components.
//!
//! Each calculator reads its configured inputs from a resource, runs once per
//! schedule run, and appends its output to the shared [`CalcLog`].

use anyhow::Result;
use bevy_ecs::prelude::*;
use bookstore::BookstoreInput;
use calc_core::{BillSettings, BookstoreSettings, CalcConfig};
use calc_report::{LineSink, TracingSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Configured bookstore inputs.
#[derive(Resource, Clone, Debug, Default)]
struct BookstoreComponent(BookstoreSettings);

/// Configured bill breakdown inputs.
#[derive(Resource, Clone, Debug, Default)]
struct BillsComponent(BillSettings);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Info,
    Error,
}

/// Console of the host: every rendered line with its severity, in order.
#[derive(Resource, Debug, Default)]
struct CalcLog {
    entries: Vec<(Severity, String)>,
}

impl CalcLog {
    #[cfg(test)]
    fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, line)| line.as_str()).collect()
    }

    fn errors(&self) -> usize {
        self.entries
            .iter()
            .filter(|(severity, _)| *severity == Severity::Error)
            .count()
    }

    /// Replay the log into another sink, keeping each line's severity.
    fn forward<S: LineSink>(&self, sink: &mut S) {
        for (severity, line) in &self.entries {
            match severity {
                Severity::Info => sink.info(line),
                Severity::Error => sink.error(line),
            }
        }
    }
}

impl LineSink for CalcLog {
    fn info(&mut self, line: &str) {
        self.entries.push((Severity::Info, line.to_string()));
    }

    fn error(&mut self, line: &str) {
        self.entries.push((Severity::Error, line.to_string()));
    }
}

fn bookstore_system(cfg: Res<BookstoreComponent>, mut log: ResMut<CalcLog>) {
    match BookstoreInput::from(&cfg.0).compute() {
        Ok(r) => calc_report::publish(&calc_report::bookstore_lines(&r), &mut *log),
        Err(e) => log.error(&calc_report::error_line(&e)),
    }
}

fn bills_system(cfg: Res<BillsComponent>, mut log: ResMut<CalcLog>) {
    match bills::compute_settings(&cfg.0) {
        Ok(outcome) => calc_report::publish(&calc_report::bill_lines(&outcome), &mut *log),
        Err(e) => log.error(&calc_report::error_line(&e)),
    }
}

fn build_world(cfg: &CalcConfig) -> World {
    let mut world = World::new();
    world.insert_resource(BookstoreComponent(cfg.bookstore.clone()));
    world.insert_resource(BillsComponent(cfg.bills.clone()));
    world.insert_resource(CalcLog::default());
    world
}

fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((bookstore_system, bills_system).chain());
    schedule
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => CalcConfig::load(path)?,
        None => CalcConfig::default(),
    };
    let mut world = build_world(&cfg);
    // No run loop: the components only act on start
    build_schedule().run(&mut world);

    let log = world.resource::<CalcLog>();
    log.forward(&mut TracingSink);
    info!(
        lines = log.entries.len(),
        errors = log.errors(),
        "game-frontend: calculators done"
    );
    Ok(())
}
