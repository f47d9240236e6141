//! Triad load generator executable.
//!
//! Allocates the three sequences, initializes them once and runs the kernel
//! until SIGINT/SIGTERM (or until the configured bound is reached).

use log::{error, info};
use triad_bandwidth::{
    ConfigLoader, Driver, TriadArrays, TriadResult, VECTOR_LEN, affinity, shutdown,
};

fn main() {
    // Initialize logger
    env_logger::init();

    if let Err(e) = run() {
        error!("Triad execution failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> TriadResult<()> {
    let config = ConfigLoader::load_triad_config()?;
    shutdown::install_handlers()?;

    if let Some(cpu) = config.cpu {
        affinity::pin_current_thread(cpu)?;
    }

    let mut arrays = TriadArrays::new(VECTOR_LEN);
    arrays.initialize();

    let driver =
        Driver::new(config.kernel(), config.run.clone()).with_verification(config.verify);
    let outcome = driver.run(&mut arrays, shutdown::flag())?;

    info!("Stopped: {:?}", outcome.stop_reason);
    Ok(())
}
