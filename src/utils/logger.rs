use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the compact fmt subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_with_level(level: Option<&str>) {
    let default_directive = match level {
        Some(level) => format!("rocket_cart={},info", level),
        None => "rocket_cart=info".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // 避免重複初始化 (tests may call this more than once)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
