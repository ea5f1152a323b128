use crate::winstates::winstates_model::Metric;

/// Raw completion percentage for one metric.
///
/// Not clamped: the numeric label shows the real value, the visual bar is
/// the caller's to cap at 100. Metrics without a positive target read 0.
pub fn metric_progress(metric: &Metric) -> f64 {
    if metric.target_value <= 0.0 {
        return 0.0;
    }
    (metric.current_value / metric.target_value) * 100.0
}

/// Mean of per-metric progress, each capped at 100.
///
/// Metrics without a positive target are excluded from both sides of the
/// average rather than dragging it down; no valid metrics means 0.
pub fn overall_progress(metrics: &[Metric]) -> i32 {
    let mut total_progress = 0.0;
    let mut valid_metrics = 0u32;

    for metric in metrics {
        if metric.target_value > 0.0 {
            total_progress += metric_progress(metric).min(100.0);
            valid_metrics += 1;
        }
    }

    if valid_metrics == 0 {
        return 0;
    }
    (total_progress / valid_metrics as f64).round() as i32
}
