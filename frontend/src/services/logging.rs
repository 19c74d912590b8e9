/// Component-tagged logging.
///
/// In the browser messages go to the devtools console; on native targets
/// (unit tests) they are emitted as `tracing` events instead.
pub struct Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    #[cfg(target_arch = "wasm32")]
    fn log(level: Level, component: &str, message: &str) {
        let line = format!("[{}] {}", component, message);
        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn log(level: Level, component: &str, message: &str) {
        match level {
            Level::Debug => tracing::debug!(component, "{}", message),
            Level::Info => tracing::info!(component, "{}", message),
            Level::Warn => tracing::warn!(component, "{}", message),
            Level::Error => tracing::error!(component, "{}", message),
        }
    }
}
