//! Graceful termination on SIGINT/SIGTERM.
//!
//! The handler only stores into a process-wide flag; the driver polls it
//! between passes and returns normally, so the process can exit with code 0.

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::errors::TriadResult;

static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// The flag set by the signal handlers.
pub fn flag() -> &'static AtomicBool {
    &SHUTDOWN_REQUESTED
}

/// Sets the flag without a signal.
pub fn request() {
    SHUTDOWN_REQUESTED.store(true, Ordering::Relaxed);
}

pub fn is_requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::Relaxed)
}

#[cfg(unix)]
extern "C" fn on_signal(_signal: libc::c_int) {
    // Async-signal-safe: a single atomic store.
    SHUTDOWN_REQUESTED.store(true, Ordering::Relaxed);
}

/// Installs the handler for SIGINT and SIGTERM.
#[cfg(unix)]
pub fn install_handlers() -> TriadResult<()> {
    use crate::errors::TriadError;

    let handler = on_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;
    for signal in [libc::SIGINT, libc::SIGTERM] {
        let previous = unsafe { libc::signal(signal, handler) };
        if previous == libc::SIG_ERR {
            return Err(TriadError::SignalHandler {
                signal,
                source: std::io::Error::last_os_error(),
            });
        }
    }

    debug!("Installed SIGINT/SIGTERM handlers");
    Ok(())
}

#[cfg(not(unix))]
pub fn install_handlers() -> TriadResult<()> {
    debug!("Signal handlers are not supported on this target; skipping");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_handlers() {
        install_handlers().expect("Handler installation should succeed");
    }

    #[cfg(unix)]
    #[test]
    fn test_raised_signal_sets_flag() {
        install_handlers().expect("Handler installation should succeed");
        let rc = unsafe { libc::raise(libc::SIGTERM) };
        assert_eq!(rc, 0);
        assert!(is_requested());
    }
}
