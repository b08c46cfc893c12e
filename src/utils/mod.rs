pub mod persistence;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` directives are honoured; `switcher_core=info` is always added.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "switcher_core=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // another subscriber may already be installed by the embedding host
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
