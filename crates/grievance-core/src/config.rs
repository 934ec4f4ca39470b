//! Production configuration constants.
//!
//! These values are shared by the core view models and the Dioxus front end
//! so the two never disagree about limits, labels, or chart geometry.
//!
//! # Usage
//!
//! ```
//! use grievance_core::config::{ADMIN_PREVIEW_LIMIT, OLD_PENDING_DAYS};
//!
//! assert_eq!(ADMIN_PREVIEW_LIMIT, 5);
//! assert_eq!(OLD_PENDING_DAYS, 5);
//! ```

// =============================================================================
// Backend
// =============================================================================

/// Backend base URL used when no build-time override is supplied.
///
/// Includes the `/api` prefix; every gateway route is appended to it.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Message used when a failed response carries no `error` field.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

// =============================================================================
// Session
// =============================================================================

/// Key under which the session identity (the user's email) is persisted.
pub const SESSION_KEY: &str = "userEmail";

// =============================================================================
// Dashboard
// =============================================================================

/// Number of complaints / feedback entries shown on the unfiltered admin board.
pub const ADMIN_PREVIEW_LIMIT: usize = 5;

/// Pending complaints older than this many days raise a notification.
pub const OLD_PENDING_DAYS: i64 = 5;

/// Department assumed for complaints submitted without one.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Department options offered by the complaint form and the admin filter.
///
/// The first entry is the default; the backend accepts any string.
pub const DEPARTMENTS: &[&str] = &[
    "General",
    "Academics",
    "Hostel",
    "Library",
    "Transport",
    "Canteen",
    "Sports",
    "IT Services",
];

// =============================================================================
// Ratings
// =============================================================================

/// Lowest selectable rating.
pub const MIN_RATING: u8 = 1;

/// Highest selectable rating (five stars / five emoji).
pub const MAX_RATING: u8 = 5;

// =============================================================================
// Chart
// =============================================================================

/// Chart centre x coordinate (SVG user units).
pub const CHART_CX: f64 = 200.0;

/// Chart centre y coordinate (SVG user units).
pub const CHART_CY: f64 = 200.0;

/// Chart radius (SVG user units).
pub const CHART_RADIUS: f64 = 160.0;

/// Side length of the square SVG viewBox.
pub const CHART_VIEWBOX: f64 = 400.0;

/// Fill of the disc drawn when every count is zero.
pub const CHART_EMPTY_COLOR: &str = "#f0f0f0";

pub const HIGH_COLOR: &str = "#f44336";
pub const MEDIUM_COLOR: &str = "#ff9800";
pub const LOW_COLOR: &str = "#4caf50";
pub const FEEDBACK_COLOR: &str = "#9c27b0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_department_is_first_option() {
        assert_eq!(DEPARTMENTS[0], DEFAULT_DEPARTMENT);
    }

    #[test]
    fn test_chart_fits_viewbox() {
        assert!(CHART_CX + CHART_RADIUS <= CHART_VIEWBOX);
        assert!(CHART_CY + CHART_RADIUS <= CHART_VIEWBOX);
    }
}
