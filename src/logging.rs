use env_logger::Env;

/// Filter used when `RUST_LOG` is unset: dependencies stay at `warn`, this
/// crate logs at `level` (default `info`). A `level` that already names
/// targets is used as given.
pub fn default_filter(level: Option<&str>) -> String {
    match level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(filter) if filter.contains('=') || filter.contains(',') => filter.to_string(),
        Some(l) => format!("warn,{}={}", env!("CARGO_CRATE_NAME"), l),
        None => format!("warn,{}=info", env!("CARGO_CRATE_NAME")),
    }
}

/// Install the global logger. `RUST_LOG` takes precedence over `level`.
/// Later calls are ignored.
pub fn init(level: Option<&str>) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(level)))
        .format_timestamp_millis()
        .format_target(false)
        .try_init();
}
