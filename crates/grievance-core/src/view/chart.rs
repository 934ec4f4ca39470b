//! Proportion chart: wedge geometry, legend and count summary.
//!
//! Wedges start at the top of the circle and run clockwise in a fixed order
//! (high, medium, low, feedback). A wedge's boundary angle at cumulative
//! percentage `p` is `p / 100 * 2π - π/2`.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::{
    CHART_CX, CHART_CY, CHART_RADIUS, FEEDBACK_COLOR, HIGH_COLOR, LOW_COLOR, MEDIUM_COLOR,
};
use crate::filter::Selection;
use crate::mirror::Mirror;
use crate::model::{Complaint, Priority};

/// One chart category, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartCategory {
    High,
    Medium,
    Low,
    Feedback,
}

impl ChartCategory {
    pub const ALL: [ChartCategory; 4] = [
        ChartCategory::High,
        ChartCategory::Medium,
        ChartCategory::Low,
        ChartCategory::Feedback,
    ];

    pub fn color(&self) -> &'static str {
        match self {
            ChartCategory::High => HIGH_COLOR,
            ChartCategory::Medium => MEDIUM_COLOR,
            ChartCategory::Low => LOW_COLOR,
            ChartCategory::Feedback => FEEDBACK_COLOR,
        }
    }

    pub fn legend_label(&self) -> &'static str {
        match self {
            ChartCategory::High => "High Priority Complaints",
            ChartCategory::Medium => "Medium Priority Complaints",
            ChartCategory::Low => "Low Priority Complaints",
            ChartCategory::Feedback => "Feedback",
        }
    }

    pub fn count_label(&self) -> &'static str {
        match self {
            ChartCategory::High => "High Priority Complaints:",
            ChartCategory::Medium => "Medium Priority Complaints:",
            ChartCategory::Low => "Low Priority Complaints:",
            ChartCategory::Feedback => "Total Feedback:",
        }
    }
}

/// The four counts the chart is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub feedback: usize,
}

impl CategoryCounts {
    pub fn from_data(complaints: &[Complaint], feedback: usize) -> Self {
        let count = |p: Priority| complaints.iter().filter(|c| c.priority == p).count();
        Self {
            high: count(Priority::High),
            medium: count(Priority::Medium),
            low: count(Priority::Low),
            feedback,
        }
    }

    pub fn get(&self, category: ChartCategory) -> usize {
        match category {
            ChartCategory::High => self.high,
            ChartCategory::Medium => self.medium,
            ChartCategory::Low => self.low,
            ChartCategory::Feedback => self.feedback,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.feedback
    }
}

/// Counts for the current selection, or for the whole mirror when
/// unfiltered (not the five-entry board preview).
pub fn chart_counts(selection: &Selection, mirror: &Mirror) -> CategoryCounts {
    let complaints = selection
        .complaints
        .as_deref()
        .unwrap_or(mirror.complaints());
    let feedback = selection
        .feedback
        .as_ref()
        .map_or(mirror.feedback().len(), Vec::len);
    CategoryCounts::from_data(complaints, feedback)
}

/// Boundary angle (radians) at cumulative percentage `percent`, 0 at north.
pub fn angle(percent: f64) -> f64 {
    percent / 100.0 * 2.0 * PI - FRAC_PI_2
}

/// SVG path of the wedge between two cumulative percentages.
pub fn wedge_path(cx: f64, cy: f64, r: f64, start_percent: f64, end_percent: f64) -> String {
    let start = angle(start_percent);
    let end = angle(end_percent);
    let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
    let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = u8::from(end_percent - start_percent > 50.0);
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        cx, cy, x1, y1, r, r, large_arc, x2, y2
    )
}

/// One slice of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub category: ChartCategory,
    pub value: usize,
    pub start_percent: f64,
    pub end_percent: f64,
    pub path: String,
}

impl Wedge {
    pub fn percent(&self) -> f64 {
        self.end_percent - self.start_percent
    }

    pub fn is_large_arc(&self) -> bool {
        self.percent() > 50.0
    }

    /// A single category holding the whole total. An arc whose endpoints
    /// coincide draws nothing, so such a wedge is rendered as a disc.
    pub fn is_full_circle(&self) -> bool {
        self.percent() >= 100.0
    }

    pub fn color(&self) -> &'static str {
        self.category.color()
    }
}

/// The chart: no wedges means a single neutral disc.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub wedges: Vec<Wedge>,
}

impl PieChart {
    pub fn from_counts(counts: &CategoryCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self { wedges: Vec::new() };
        }

        let mut cumulative = 0.0;
        let wedges = ChartCategory::ALL
            .iter()
            .filter_map(|&category| {
                let value = counts.get(category);
                if value == 0 {
                    return None;
                }
                let percent = value as f64 / total as f64 * 100.0;
                let start = cumulative;
                let end = cumulative + percent;
                cumulative = end;
                Some(Wedge {
                    category,
                    value,
                    start_percent: start,
                    end_percent: end,
                    path: wedge_path(CHART_CX, CHART_CY, CHART_RADIUS, start, end),
                })
            })
            .collect();

        Self { wedges }
    }

    /// Zero total: draw the neutral disc and nothing else.
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }
}

/// Legend row: colour dot + label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn legend() -> Vec<LegendEntry> {
    ChartCategory::ALL
        .iter()
        .map(|c| LegendEntry {
            label: c.legend_label(),
            color: c.color(),
        })
        .collect()
}

/// Count summary row shown next to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountEntry {
    pub label: &'static str,
    pub value: usize,
    pub color: &'static str,
}

pub fn count_summary(counts: &CategoryCounts) -> Vec<CountEntry> {
    ChartCategory::ALL
        .iter()
        .map(|&c| CountEntry {
            label: c.count_label(),
            value: counts.get(c),
            color: c.color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(high: usize, medium: usize, low: usize, feedback: usize) -> CategoryCounts {
        CategoryCounts {
            high,
            medium,
            low,
            feedback,
        }
    }

    #[test]
    fn test_zero_total_is_single_disc() {
        let chart = PieChart::from_counts(&counts(0, 0, 0, 0));
        assert!(chart.is_empty());
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        for c in [counts(1, 2, 3, 4), counts(7, 0, 0, 3), counts(1, 1, 1, 0)] {
            let chart = PieChart::from_counts(&c);
            let sum: f64 = chart.wedges.iter().map(Wedge::percent).sum();
            assert!((sum - 100.0).abs() < 1e-9, "sum was {}", sum);
            let last = chart.wedges.last().unwrap();
            assert!((last.end_percent - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_categories_are_skipped_in_fixed_order() {
        let chart = PieChart::from_counts(&counts(2, 0, 1, 1));
        let order: Vec<ChartCategory> = chart.wedges.iter().map(|w| w.category).collect();
        assert_eq!(
            order,
            vec![ChartCategory::High, ChartCategory::Low, ChartCategory::Feedback]
        );
        assert_eq!(chart.wedges[0].color(), "#f44336");
        assert_eq!(chart.wedges[2].color(), "#9c27b0");
    }

    #[test]
    fn test_large_arc_only_above_half() {
        let chart = PieChart::from_counts(&counts(3, 1, 0, 0));
        assert!(chart.wedges[0].is_large_arc());
        assert!(chart.wedges[0].path.contains(" 0 1 1 "));
        assert!(!chart.wedges[1].is_large_arc());

        let even = PieChart::from_counts(&counts(1, 1, 0, 0));
        assert!(!even.wedges[0].is_large_arc());
    }

    #[test]
    fn test_angle_starts_at_north() {
        assert!((angle(0.0) + FRAC_PI_2).abs() < 1e-12);
        assert!((angle(25.0)).abs() < 1e-12);
        assert!((angle(50.0) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_wedge_path_shape() {
        let path = wedge_path(200.0, 200.0, 160.0, 0.0, 25.0);
        assert!(path.starts_with("M 200 200 L 200"));
        assert!(path.contains("A 160 160 0 0 1 360"));
        assert!(path.ends_with(" Z"));
    }

    #[test]
    fn test_single_category_is_full_circle() {
        let chart = PieChart::from_counts(&counts(0, 0, 0, 4));
        assert_eq!(chart.wedges.len(), 1);
        assert!(chart.wedges[0].is_full_circle());
    }

    #[test]
    fn test_legend_and_summary() {
        let legend = legend();
        assert_eq!(legend.len(), 4);
        assert_eq!(legend[3].label, "Feedback");

        let summary = count_summary(&counts(1, 2, 3, 4));
        assert_eq!(summary[3].label, "Total Feedback:");
        assert_eq!(summary[3].value, 4);
    }

    #[test]
    fn test_chart_counts_use_whole_mirror_when_unfiltered() {
        use crate::model::{ComplaintId, ComplaintStatus, Timestamp};
        let complaints: Vec<Complaint> = (0..7)
            .map(|i| Complaint {
                id: ComplaintId::from_u64(i),
                title: "t".into(),
                description: "d".into(),
                priority: Priority::Medium,
                department: None,
                anonymous: true,
                user_email: None,
                status: ComplaintStatus::Pending,
                submitted_at: Timestamp::now(),
                created_at: None,
                resolved_at: None,
            })
            .collect();
        let mirror = Mirror::from_parts(complaints, Vec::new());
        let c = chart_counts(&Selection::unfiltered(), &mirror);
        assert_eq!(c.medium, 7);
        assert_eq!(c.total(), 7);
    }
}
