//! Runtime configuration for the front end.

use grievance_core::config::DEFAULT_API_BASE;

/// Backend base URL, including the `/api` prefix.
///
/// Set `GRIEVANCE_API_BASE` at build time to point the bundle at another
/// backend (`GRIEVANCE_API_BASE=https://portal.example.edu/api dx build`).
pub fn api_base() -> &'static str {
    match option_env!("GRIEVANCE_API_BASE") {
        Some(base) if !base.trim().is_empty() => base.trim_end_matches('/'),
        _ => DEFAULT_API_BASE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        let base = api_base();
        assert!(!base.ends_with('/'));
        assert!(base.ends_with("/api") || option_env!("GRIEVANCE_API_BASE").is_some());
    }
}
