//! Debug logging to stderr, off unless MATHZY_DEBUG is set to a truthy value.
//! The variable is read once per process.
use std::sync::OnceLock;

pub const DEBUG_ENV_VAR: &str = "MATHZY_DEBUG";

static ENABLED: OnceLock<bool> = OnceLock::new();

/// Accepts `1`, `true`, `yes` and `on` (case-insensitive).
pub fn flag_enabled(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| flag_enabled(std::env::var(DEBUG_ENV_VAR).ok().as_deref()))
}

/// `eprintln!` that only fires when [`is_enabled`] is true.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!($($arg)*); }
    }};
}

#[cfg(test)]
mod tests {
    use super::flag_enabled;

    #[test]
    fn truthy_values() {
        for v in ["1", "true", "TRUE", "yes", " on "] {
            assert!(flag_enabled(Some(v)), "{v:?}");
        }
    }

    #[test]
    fn everything_else_is_off() {
        assert!(!flag_enabled(None));
        for v in ["", "0", "false", "no", "debug"] {
            assert!(!flag_enabled(Some(v)), "{v:?}");
        }
    }
}
