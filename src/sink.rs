extern crate alloc;

use alloc::{string::String, vec::Vec};

/// Observer notified with every new status message a session produces.
///
/// Presentation layers implement this to render status text. An `Err` is
/// treated by the session as an internal fault.
pub trait StatusSink: Send {
    fn on_status(&mut self, status: &str) -> anyhow::Result<()>;
}

/// [`StatusSink`] forwarding status messages to the `log` facade.
pub struct LogSink;

impl StatusSink for LogSink {
    fn on_status(&mut self, status: &str) -> anyhow::Result<()> {
        log::info!("{}", status);
        Ok(())
    }
}

/// [`StatusSink`] that keeps every message it receives.
#[derive(Default)]
pub struct HistorySink {
    messages: Vec<String>,
}

impl HistorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl StatusSink for HistorySink {
    fn on_status(&mut self, status: &str) -> anyhow::Result<()> {
        self.messages.push(String::from(status));
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<S: StatusSink> StatusSink for std::sync::Arc<std::sync::Mutex<S>> {
    fn on_status(&mut self, status: &str) -> anyhow::Result<()> {
        let mut inner = self
            .lock()
            .map_err(|_| anyhow::anyhow!("status sink lock poisoned"))?;
        inner.on_status(status)
    }
}
