//! gymtrack entry point.
//!
//! Usage: `gymtrack [config.json]`. Logging is controlled by `RUST_LOG`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use gymtrack::{
    config::TrackerConfig,
    core::registry::Registry,
    persist::flat_file::FlatFileStore,
    shell::session::Shell,
};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("\n[Fatal] {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = TrackerConfig::resolve(config_path.as_deref())?;
    log::info!("using storage directory {}", config.data_dir.display());

    let store = FlatFileStore::from_config(&config);
    let (mut registry, report) = Registry::open(Box::new(store))?;
    if !report.is_clean() {
        log::warn!("store loaded with problems: {report:?}");
    }
    println!(
        "[Info] {} members and {} reservations loaded.",
        registry.member_count(),
        registry.reservation_count()
    );

    if registry.member_count() == 0 && config.seed_demo_data {
        println!("[Info] First run detected, loading demo data.");
        registry.seed_demo_data()?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock()).run(&mut registry)?;
    Ok(())
}
