use log::warn;

/// Receives zones that were requested but are unknown to the directory.
pub trait ZoneObserver: Send + Sync {
    fn unknown_zone(&self, name: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ZoneObserver for LogObserver {
    fn unknown_zone(&self, name: &str) {
        warn!("could not find zone {}", name);
    }
}
