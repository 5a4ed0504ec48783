//! Tracing initialization for the embedding loader

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Called once by the loader before any mod registers. Safe to call
/// again; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_reentrant() {
        super::init();
        super::init();
    }
}
