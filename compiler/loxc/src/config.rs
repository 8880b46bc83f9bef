//! Driver configuration read from the environment.

use lox_diagnostic::emitter::ColorMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub color: ColorMode,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup. A non-empty `NO_COLOR` turns color off,
    /// otherwise `LOX_COLOR` may be `always`, `never` or `auto`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return RunConfig {
                color: ColorMode::Never,
            };
        }
        let color = match var("LOX_COLOR").as_deref() {
            Some("always") => ColorMode::Always,
            Some("never") => ColorMode::Never,
            _ => ColorMode::Auto,
        };
        RunConfig { color }
    }
}
