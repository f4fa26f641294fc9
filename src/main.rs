use anyhow::Context;
use lineup_planner::prelude::*;

// Team defaults, overridable through LINEUP_BENCH_EXEMPT and LINEUP_FIRST_BASE
const BENCH_EXEMPT: [Player; 3] = [0, 5, 6];
const FIRST_BASE: [Player; 5] = [3, 5, 7, 9, 10];

fn main() -> anyhow::Result<()> {
    let config = Configuration::from_env();
    // before the rules read the environment, so their warnings are logged
    config.init_logging()?;

    let rules = LineupRulesBuilder::new()
        .with_bench_exempt(BENCH_EXEMPT)
        .with_first_base_eligible(FIRST_BASE)
        .with_env()
        .build()
        .context("invalid lineup rules")?;

    let mut tie_break = config.tie_break();
    let generator = LineupGenerator::new(rules, config)?;
    let game = generator
        .generate(&mut tie_break)
        .context("could not plan the game")?;

    print!("{game}");
    Ok(())
}
