use std::process::ExitCode;
use torus_life::{RulePreset, SimConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::from_env();
    log::info!("Running with {:?}", config);

    let grid = match config.build_populated() {
        Ok(grid) => grid,
        Err(e) => {
            log::error!("Failed to set up the board: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rules = grid.rules();
    let rule_name = RulePreset::index_of(rules).map_or("custom", |i| torus_life::rules::PRESETS[i].name);
    log::info!(
        "Board {} ({}x{} px), {} living cells, rules {} ({})",
        grid.dimensions(),
        grid.pixel_size(true)[0],
        grid.pixel_size(true)[1],
        grid.living_cells(),
        rules,
        rule_name,
    );
    ExitCode::SUCCESS
}
