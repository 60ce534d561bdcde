//! Phases command: list the eight phases in cycle order and mark the current one.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use lunacal_engine::Clock;
use lunacal_ephemeris::SunCalcOracle;
use lunacal_phase::{MoonOracle, PhaseCategory, PhaseGuide};

use crate::cli::PhasesArgs;
use crate::convert;

#[derive(Debug, Serialize)]
struct PhaseEntry {
    index: usize,
    key: &'static str,
    waxing: bool,
    waning: bool,
    current: bool,
}

/// Run the phase listing.
pub fn run(args: PhasesArgs) -> Result<()> {
    let _cmd = info_span!("phases").entered();

    let now = convert::clock_for(args.now).now();
    let sample = SunCalcOracle
        .sample(now)
        .context("failed to sample the moon")?;

    let mut guide = PhaseGuide::new();
    guide.select(sample.category().index())?;
    debug!(%now, phase = %guide.current(), percent = sample.percent(), "current phase");

    let entries = phase_entries(&guide);
    if args.json {
        let json = serde_json::to_string_pretty(&entries).context("failed to serialize phases")?;
        println!("{json}");
    } else {
        for e in &entries {
            let mark = if e.current { '>' } else { ' ' };
            let trend = match (e.waxing, e.waning) {
                (true, _) => "waxing",
                (_, true) => "waning",
                _ => "",
            };
            println!("{mark} {} {:<16} {trend}", e.index, e.key);
        }
    }
    Ok(())
}

/// One entry per phase, walking the guide once around the cycle.
fn phase_entries(guide: &PhaseGuide) -> Vec<PhaseEntry> {
    let current = guide.current();
    let mut walker = PhaseGuide::new();
    let mut entries = Vec::with_capacity(PhaseCategory::ALL.len());
    let mut phase = walker.current();
    for _ in 0..PhaseCategory::ALL.len() {
        entries.push(PhaseEntry {
            index: walker.current_index(),
            key: phase.key(),
            waxing: phase.is_waxing(),
            waning: phase.is_waning(),
            current: phase == current,
        });
        phase = walker.next();
    }
    entries
}
