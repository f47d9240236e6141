//! Pinning the load generator to a single logical CPU.

use log::{info, warn};

use crate::errors::TriadResult;

/// Restricts the calling thread (the whole process, since it is
/// single-threaded) to `cpu`.
#[cfg(target_os = "linux")]
pub fn pin_current_thread(cpu: usize) -> TriadResult<()> {
    use crate::errors::TriadError;

    if cpu >= libc::CPU_SETSIZE as usize {
        return Err(TriadError::Affinity {
            cpu,
            source: std::io::Error::from_raw_os_error(libc::EINVAL),
        });
    }

    let rc = unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_ZERO(&mut set);
        libc::CPU_SET(cpu, &mut set);
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set)
    };

    if rc != 0 {
        return Err(TriadError::Affinity {
            cpu,
            source: std::io::Error::last_os_error(),
        });
    }

    info!("Pinned to CPU {}", cpu);
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn pin_current_thread(cpu: usize) -> TriadResult<()> {
    warn!("CPU pinning is only supported on Linux; ignoring cpu = {}", cpu);
    Ok(())
}

/// Logical CPUs the calling thread may run on.
#[cfg(target_os = "linux")]
pub fn allowed_cpus() -> TriadResult<Vec<usize>> {
    let mut set: libc::cpu_set_t = unsafe { std::mem::zeroed() };
    let rc =
        unsafe { libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) };
    if rc != 0 {
        warn!("sched_getaffinity failed");
        return Err(std::io::Error::last_os_error().into());
    }

    Ok((0..libc::CPU_SETSIZE as usize)
        .filter(|&cpu| unsafe { libc::CPU_ISSET(cpu, &set) })
        .collect())
}
