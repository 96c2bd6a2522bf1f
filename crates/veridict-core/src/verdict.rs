//! Verdict presentation: label categorization and the probability-unit
//! heuristic.
//!
//! Everything here is pure. The state machine stores predictions raw; this
//! module is the single place where the service's ambiguous response shapes
//! are resolved into display attributes.

use crate::PredictionResult;

/// Coarse classification derived from the service's free-form label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictCategory {
    Fake,
    Real,
    Unknown,
}

impl VerdictCategory {
    /// Categorize a label by substring.
    ///
    /// First match wins in this order: "fake", then "real"/"true". A label
    /// containing both "fake" and "real" is therefore Fake. The ordering is
    /// part of the contract; do not reorder.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("fake") {
            Self::Fake
        } else if lower.contains("real") || lower.contains("true") {
            Self::Real
        } else {
            Self::Unknown
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Fake => "✗",
            Self::Real => "✓",
            Self::Unknown => "?",
        }
    }
}

/// Resolve the service's ambiguous probability units into a percentage,
/// rounded to one fractional digit.
///
/// Some responses carry a fraction in [0, 1], others a percentage in
/// [0, 100]; values above 1 are assumed to already be percentages. The
/// heuristic is lossy at the boundary: exactly 1.0 maps to 100% (correct
/// either way), while a value like 1.5 is ambiguous and is taken as
/// already-percentage per the `> 1` rule. Isolated here so a stricter
/// contract can replace it without touching the state machine.
pub fn normalize_percentage(probability: f64) -> f64 {
    let pct = if probability > 1.0 {
        probability
    } else {
        probability * 100.0
    };
    (pct * 10.0).round() / 10.0
}

/// Display attributes derived from a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub label: String,
    pub category: VerdictCategory,
    /// Confidence percentage, one fractional digit.
    pub percentage: f64,
    /// Formatted percentage, e.g. "92.0%".
    pub percentage_text: String,
    /// Progress-bar fill as a ratio of the bar width. Not clamped: an
    /// upstream probability above 100 overflows the bar (known edge case,
    /// the renderer clips).
    pub fill: f64,
}

/// Derive the display model for a prediction.
pub fn present(result: &PredictionResult) -> DisplayModel {
    let category = VerdictCategory::from_label(&result.label);
    let percentage = normalize_percentage(result.probability);
    DisplayModel {
        label: result.label.clone(),
        category,
        percentage,
        percentage_text: format!("{percentage:.1}%"),
        fill: percentage / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(label: &str, probability: f64) -> PredictionResult {
        PredictionResult {
            label: label.to_string(),
            probability,
        }
    }

    #[test]
    fn fake_labels_categorize_fake() {
        for label in ["FAKE NEWS", "fake", "Probably Fake", "FaKe"] {
            assert_eq!(VerdictCategory::from_label(label), VerdictCategory::Fake);
        }
    }

    #[test]
    fn real_and_true_labels_categorize_real() {
        for label in ["REAL NEWS", "true story", "Real"] {
            assert_eq!(VerdictCategory::from_label(label), VerdictCategory::Real);
        }
    }

    #[test]
    fn fake_wins_over_real_cooccurrence() {
        // Substring check order is significant: "fake" beats "real"/"true".
        assert_eq!(
            VerdictCategory::from_label("fake but looks real"),
            VerdictCategory::Fake
        );
        assert_eq!(
            VerdictCategory::from_label("TRUE OR FAKE"),
            VerdictCategory::Fake
        );
    }

    #[test]
    fn unrelated_labels_categorize_unknown() {
        assert_eq!(
            VerdictCategory::from_label("satire"),
            VerdictCategory::Unknown
        );
        assert_eq!(VerdictCategory::from_label(""), VerdictCategory::Unknown);
    }

    #[test]
    fn fractional_probability_scales_to_percentage() {
        assert_eq!(normalize_percentage(0.92), 92.0);
        assert_eq!(normalize_percentage(0.5), 50.0);
        assert_eq!(normalize_percentage(0.0), 0.0);
    }

    #[test]
    fn percentage_form_passes_through() {
        assert_eq!(normalize_percentage(87.0), 87.0);
        assert_eq!(normalize_percentage(100.0), 100.0);
    }

    #[test]
    fn boundary_one_is_one_hundred_percent() {
        // 1.0 is treated as a fraction; either reading gives 100%.
        assert_eq!(normalize_percentage(1.0), 100.0);
    }

    #[test]
    fn ambiguous_low_percentage_taken_as_percentage() {
        // 1.5 could mean 1.5% or 150%; the > 1 rule reads it as 1.5%.
        assert_eq!(normalize_percentage(1.5), 1.5);
    }

    #[test]
    fn rounds_to_one_fractional_digit() {
        assert_eq!(normalize_percentage(0.123), 12.3);
        assert_eq!(normalize_percentage(87.46), 87.5);
    }

    #[test]
    fn present_real_news_fraction() {
        let display = present(&prediction("REAL NEWS", 0.92));
        assert_eq!(display.category, VerdictCategory::Real);
        assert_eq!(display.percentage_text, "92.0%");
        assert_eq!(display.fill, 0.92);
    }

    #[test]
    fn present_fake_news_percentage_form() {
        let display = present(&prediction("FAKE NEWS", 87.0));
        assert_eq!(display.category, VerdictCategory::Fake);
        assert_eq!(display.percentage_text, "87.0%");
    }

    #[test]
    fn overflow_fill_is_not_clamped() {
        let display = present(&prediction("REAL", 150.0));
        assert_eq!(display.percentage_text, "150.0%");
        assert!(display.fill > 1.0);
    }
}
