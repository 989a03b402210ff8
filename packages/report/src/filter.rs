//! Filter predicate evaluation over noise reports.

use chrono::Timelike as _;
use noise_map_report_models::{NoiseReport, ReportFilter, TimeWindow};

/// First daytime hour, inclusive.
const DAY_START_HOUR: u32 = 6;
/// First nighttime hour (end of day window), exclusive for day.
const DAY_END_HOUR: u32 = 22;

/// Applies a filter to a report set, returning matches in input order.
#[must_use]
pub fn filter_reports<'a>(
    reports: &'a [NoiseReport],
    filter: &ReportFilter,
) -> Vec<&'a NoiseReport> {
    reports
        .iter()
        .filter(|report| matches_filter(report, filter))
        .collect()
}

/// Evaluates a single report against a filter.
#[must_use]
pub fn matches_filter(report: &NoiseReport, filter: &ReportFilter) -> bool {
    if !window_contains(filter.time, report.measured_at.hour()) {
        return false;
    }

    if let Some(min) = filter.decibel_min
        && report.decibel < min
    {
        return false;
    }
    if let Some(max) = filter.decibel_max
        && report.decibel > max
    {
        return false;
    }

    if let Some(categories) = &filter.categories
        && !categories.contains(&report.category)
    {
        return false;
    }

    true
}

/// Tests whether a clock hour (0-23) falls inside a time window.
///
/// Custom windows are `[from, to)` and wrap past midnight when
/// `from > to`; a window with `from == to` matches nothing.
fn window_contains(window: TimeWindow, hour: u32) -> bool {
    match window {
        TimeWindow::Any => true,
        TimeWindow::Day => (DAY_START_HOUR..DAY_END_HOUR).contains(&hour),
        TimeWindow::Night => !(DAY_START_HOUR..DAY_END_HOUR).contains(&hour),
        TimeWindow::Custom { from_hour, to_hour } => {
            let (from, to) = (u32::from(from_hour), u32::from(to_hour));
            if from <= to {
                (from..to).contains(&hour)
            } else {
                hour >= from || hour < to
            }
        }
    }
}
