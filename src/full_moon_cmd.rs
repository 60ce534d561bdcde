//! Next-full-moon command: scan forward from now and report the first match.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lunacal_engine::{Clock, find_next_full_moon};
use lunacal_ephemeris::SunCalcOracle;

use crate::cli::NextFullMoonArgs;
use crate::config::LunacalConfig;
use crate::{convert, render};

/// Run the full-moon search.
pub fn run(args: NextFullMoonArgs, config: &LunacalConfig) -> Result<()> {
    let _cmd = info_span!("next_full_moon").entered();

    let locator_cfg =
        convert::build_locator_config(&config.locator, args.horizon_days, args.tolerance)?;
    let grid_cfg = convert::build_grid_config(&config.calendar, None, None)?;
    let now = convert::clock_for(args.now).now();

    info!(
        %now,
        horizon_days = locator_cfg.horizon_days(),
        tolerance = locator_cfg.tolerance(),
        "searching for next full moon"
    );
    let result = find_next_full_moon(now, &SunCalcOracle, &locator_cfg)
        .context("full moon search failed")?;
    info!(found = result.is_found(), days_until = result.days_until(), "search done");

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
        println!("{json}");
    } else {
        println!(
            "{}",
            render::render_full_moon(&result, locator_cfg.horizon_days(), grid_cfg.utc_offset()?)
        );
    }
    Ok(())
}
