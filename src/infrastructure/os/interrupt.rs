use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Installs a Ctrl-C / SIGTERM handler that raises the returned flag.
///
/// The flag is polled between devices so an interrupted run still goes
/// through the normal shutdown path and flushes the log.
///
/// # Errors
///
/// Returns `ctrlc::Error` if a handler is already installed or the signal
/// cannot be hooked.
pub fn install_interrupt_flag() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let flag = Arc::new(AtomicBool::new(false));
    let raised = Arc::clone(&flag);
    ctrlc::set_handler(move || {
        raised.store(true, Ordering::SeqCst);
    })?;
    Ok(flag)
}
