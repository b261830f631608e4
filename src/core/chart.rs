// IncomeScope - core/chart.rs
//
// Scatterplot data preparation: series grouping and axis maths.
// The actual painting happens in ui::panels::chart; everything here is
// pure and unit-testable.

use crate::core::model::{BroadRace, Submission};

/// Chart title when at least one point is plotted.
pub const CHART_TITLE: &str = "Income Distribution";

/// Placeholder title shown over an empty chart.
pub const CHART_TITLE_EMPTY: &str = "Income Distribution (No Data Yet)";

/// One scatter series: every filtered row of a broad racial category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    /// The category this series plots (also the legend entry).
    pub race: BroadRace,

    /// (age, income) pairs, one per row.
    pub points: Vec<(f64, f64)>,
}

/// Build scatter series from the filtered view of the table.
///
/// `indices` index into `rows` (the output of `filter::apply_filters`).
/// Series appear in `BroadRace::all()` order; categories with no matching
/// rows are omitted. Exactly one point is produced per filtered row.
pub fn scatter_series(rows: &[Submission], indices: &[usize]) -> Vec<ScatterSeries> {
    BroadRace::all()
        .iter()
        .filter_map(|&race| {
            let points: Vec<(f64, f64)> = indices
                .iter()
                .filter_map(|&i| rows.get(i))
                .filter(|row| row.racial_broad == race)
                .map(|row| (f64::from(row.age), row.income as f64))
                .collect();
            (!points.is_empty()).then_some(ScatterSeries { race, points })
        })
        .collect()
}

/// Total point count across all series.
pub fn point_count(series: &[ScatterSeries]) -> usize {
    series.iter().map(|s| s.points.len()).sum()
}

/// A plottable axis range with round-numbered tick positions.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBounds {
    /// Lower edge of the axis (a multiple of the tick step).
    pub min: f64,

    /// Upper edge of the axis.
    pub max: f64,

    /// Tick positions from `min` to `max` inclusive.
    pub ticks: Vec<f64>,
}

impl AxisBounds {
    /// Normalise `value` into 0..=1 along this axis.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.max > self.min {
            (value - self.min) / (self.max - self.min)
        } else {
            0.5
        }
    }
}

/// Compute a "nice" axis covering `min..=max` with roughly `target_ticks`
/// tick marks at round positions (1, 2, or 5 times a power of ten).
///
/// A degenerate range (single value) is padded so the point does not sit
/// on the chart edge.
pub fn nice_axis(min: f64, max: f64, target_ticks: usize) -> AxisBounds {
    let (min, max) = if (max - min).abs() < f64::EPSILON {
        // Degenerate: a single distinct value. Pad by 10% (or 1.0 at zero).
        let pad = if min.abs() < f64::EPSILON {
            1.0
        } else {
            min.abs() * 0.1
        };
        (min - pad, max + pad)
    } else {
        (min, max)
    };

    let raw_step = (max - min) / target_ticks.max(2) as f64;
    let step = nice_step(raw_step);

    let nice_min = (min / step).floor() * step;
    let nice_max = (max / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut tick = nice_min;
    // Half-step tolerance absorbs floating point drift at the top edge.
    while tick <= nice_max + step * 0.5 {
        ticks.push(tick);
        tick += step;
    }

    AxisBounds {
        min: nice_min,
        max: nice_max,
        ticks,
    }
}

/// Round `raw` up to the nearest 1/2/5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.abs().log10().floor());
    let residual = raw / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Continent, Gender};

    fn make_row(age: u32, income: u64, race: BroadRace) -> Submission {
        Submission {
            age,
            income,
            racial_broad: race,
            racial_specific: "Other".to_string(),
            gender: Gender::Other,
            continent: Continent::Europe,
            country: "France".to_string(),
        }
    }

    #[test]
    fn test_empty_table_yields_no_series() {
        assert!(scatter_series(&[], &[]).is_empty());
    }

    #[test]
    fn test_one_point_per_row() {
        let rows = vec![
            make_row(30, 40_000, BroadRace::Asian),
            make_row(50, 60_000, BroadRace::Asian),
            make_row(40, 55_000, BroadRace::White),
        ];
        let indices: Vec<usize> = (0..rows.len()).collect();
        let series = scatter_series(&rows, &indices);

        assert_eq!(series.len(), 2);
        assert_eq!(point_count(&series), rows.len());

        // Series follow BroadRace::all() order: White before Asian.
        assert_eq!(series[0].race, BroadRace::White);
        assert_eq!(series[0].points, vec![(40.0, 55_000.0)]);
        assert_eq!(series[1].race, BroadRace::Asian);
        assert_eq!(series[1].points, vec![(30.0, 40_000.0), (50.0, 60_000.0)]);
    }

    #[test]
    fn test_series_respect_filtered_indices() {
        let rows = vec![
            make_row(30, 40_000, BroadRace::Asian),
            make_row(50, 60_000, BroadRace::White),
        ];
        let series = scatter_series(&rows, &[1]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].race, BroadRace::White);
    }

    #[test]
    fn test_nice_axis_covers_range_with_round_ticks() {
        let axis = nice_axis(18.0, 80.0, 6);
        assert!(axis.min <= 18.0);
        assert!(axis.max >= 80.0);
        assert!(axis.ticks.len() >= 4);
        // Ticks are evenly spaced.
        let step = axis.ticks[1] - axis.ticks[0];
        for pair in axis.ticks.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nice_axis_degenerate_range() {
        let axis = nice_axis(52_000.0, 52_000.0, 5);
        assert!(axis.min < 52_000.0);
        assert!(axis.max > 52_000.0);

        let origin = nice_axis(0.0, 0.0, 5);
        assert!(origin.min < 0.0 && origin.max > 0.0);
    }

    #[test]
    fn test_fraction_maps_bounds_to_unit_interval() {
        let axis = AxisBounds {
            min: 0.0,
            max: 100.0,
            ticks: vec![0.0, 50.0, 100.0],
        };
        assert_eq!(axis.fraction(0.0), 0.0);
        assert_eq!(axis.fraction(100.0), 1.0);
        assert_eq!(axis.fraction(25.0), 0.25);
    }
}
