use std::fs;

use lineup_planner::prelude::*;

fn remove_log_files() {
    for entry in fs::read_dir(".").unwrap().flatten() {
        if entry.file_name().to_string_lossy().ends_with("_lineup_log.txt") {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[test]
fn file_logger_is_installed_once() {
    let config = Configuration::new().with_log(true).with_seed(4);

    // the binary installs logging first, then builds the generator with the same config
    config.init_logging().unwrap();
    config.init_logging().unwrap();
    let rules = LineupRulesBuilder::new()
        .with_bench_exempt([0, 5, 6])
        .with_first_base_eligible([3, 5, 7, 9, 10])
        .build()
        .unwrap();
    let mut tie_break = config.tie_break();
    let generator = LineupGenerator::new(rules, config);

    remove_log_files();
    let game = generator.unwrap().generate(&mut tie_break).unwrap();
    assert_eq!(game.len(), 5);
}
