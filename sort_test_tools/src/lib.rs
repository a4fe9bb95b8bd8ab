use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

pub use bubble_sort::Sort;

pub mod fixtures;
pub mod patterns;

#[doc(hidden)]
pub use paste;

/// Installs a fmt subscriber filtered by `RUST_LOG`, once per process.
pub fn init_logging() {
    static LOGGING: OnceCell<()> = OnceCell::new();

    LOGGING.get_or_init(|| {
        // Another harness may have installed a global subscriber already, that one wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
