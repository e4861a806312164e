use super::*;

fn row(code: &str, positive: i64, negative: i64, neutral: i64) -> CourseFeedbackSummary {
    CourseFeedbackSummary {
        course_code: code.to_owned(),
        feedback_count: positive + negative + neutral,
        positive,
        negative,
        neutral,
        ..CourseFeedbackSummary::default()
    }
}

#[test]
fn totals_aggregate_across_rows() {
    let totals = SentimentTotals::from_rows(&[row("CS101", 3, 1, 2), row("CS201", 2, 0, 1)]);
    assert_eq!(
        totals,
        SentimentTotals {
            positive: 5,
            negative: 1,
            neutral: 3
        }
    );
    assert_eq!(totals.total(), 9);
}

#[test]
fn slices_drop_zero_categories() {
    let totals = SentimentTotals {
        positive: 4,
        negative: 0,
        neutral: 1,
    };
    let labels: Vec<_> = totals.slices().into_iter().map(|(l, _, _)| l).collect();
    assert_eq!(labels, vec!["Positive", "Neutral"]);
}

#[test]
fn empty_totals_have_no_slices() {
    assert!(SentimentTotals::default().slices().is_empty());
    assert_eq!(SentimentTotals::default().total(), 0);
}

#[test]
fn polar_starts_at_the_top() {
    let (x, y) = polar(80.0, 80.0, 70.0, 0.0);
    assert!((x - 80.0).abs() < 1e-9);
    assert!((y - 10.0).abs() < 1e-9);
}

#[test]
fn polar_quarter_turn_is_east() {
    let (x, y) = polar(80.0, 80.0, 70.0, 0.25);
    assert!((x - 150.0).abs() < 1e-9);
    assert!((y - 80.0).abs() < 1e-9);
}

#[test]
fn slice_path_is_a_closed_wedge() {
    let d = slice_path(80.0, 80.0, 70.0, 0.0, 0.25);
    assert!(d.starts_with("M 80.00 80.00 L "));
    assert!(d.contains(" A 70.00 70.00 0 0 1 "));
    assert!(d.ends_with('Z'));
}

#[test]
fn majority_slice_uses_large_arc_flag() {
    let d = slice_path(80.0, 80.0, 70.0, 0.0, 0.75);
    assert!(d.contains(" A 70.00 70.00 0 1 1 "));
}

#[test]
fn bar_height_scales_against_max() {
    assert!((bar_height(5, 10, 120.0) - 60.0).abs() < 1e-9);
    assert!((bar_height(10, 10, 120.0) - 120.0).abs() < 1e-9);
}

#[test]
fn bar_height_handles_empty_data() {
    assert_eq!(bar_height(0, 10, 120.0), 0.0);
    assert_eq!(bar_height(5, 0, 120.0), 0.0);
}
