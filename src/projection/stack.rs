//! Stacked-area layers for the projection chart.
//!
//! Layers are stacked bottom-up in source order. Only productive sources
//! (enabled, positive budget and CPA) get a layer, one per distinct key.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::series::DailyProjection;
use crate::models::Source;

/// One source's band on one day: `[y0, y1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub key: String,
    pub y0: f64,
    pub y1: f64,
}

impl Layer {
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// A chart column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedDay {
    pub date: NaiveDate,
    /// `"MM-DD"` axis label.
    pub label: String,
    pub total: f64,
    pub layers: Vec<Layer>,
}

/// Stacked chart data with its vertical extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackedChart {
    pub rows: Vec<StackedDay>,
    /// `max(1, largest day total)`.
    pub max_y: f64,
}

/// Builds cumulative layers for each projection row.
pub fn stack_series(series: &[DailyProjection], sources: &[Source]) -> StackedChart {
    // A repeated key has a single value per day; first occurrence sets its layer order.
    let mut seen = HashSet::new();
    let keys: Vec<&str> = sources
        .iter()
        .filter(|s| s.sanitized().is_productive())
        .map(|s| s.key.as_str())
        .filter(|key| seen.insert(*key))
        .collect();

    let rows: Vec<StackedDay> = series
        .iter()
        .map(|row| {
            let mut acc = 0.0;
            let layers = keys
                .iter()
                .map(|&key| {
                    let y0 = acc;
                    acc += row.get(key);
                    Layer {
                        key: key.to_string(),
                        y0,
                        y1: acc,
                    }
                })
                .collect();
            StackedDay {
                date: row.date,
                label: row.label(),
                total: acc,
                layers,
            }
        })
        .collect();

    let max_y = rows.iter().map(|r| r.total).fold(1.0, f64::max);
    StackedChart { rows, max_y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_sources;
    use crate::projection::{project_daily_applicants, sum_projection};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_layers_stack_contiguously() {
        let sources = default_sources();
        let series = project_daily_applicants(&sources, date(2025, 11, 1), date(2025, 11, 14));
        let chart = stack_series(&series, &sources);
        assert_eq!(chart.rows.len(), 14);

        for (row, proj) in chart.rows.iter().zip(&series) {
            // qr_posters is disabled in the demo set
            assert_eq!(row.layers.len(), 4);
            assert!(row.layers.iter().all(|l| l.key != "qr_posters"));
            assert_eq!(row.layers[0].y0, 0.0);
            for w in row.layers.windows(2) {
                assert!((w[0].y1 - w[1].y0).abs() < 1e-10);
            }
            assert!((row.total - proj.total()).abs() < 1e-9);
            assert!(row.total <= chart.max_y);
        }
    }

    #[test]
    fn test_duplicate_keys_stack_once() {
        let sources = [
            Source::new("indeed", 300.0, 18.43),
            Source::new("indeed", 100.0, 10.0),
        ];
        let series = project_daily_applicants(&sources, date(2025, 11, 1), date(2025, 11, 1));
        let chart = stack_series(&series, &sources);
        let row = &chart.rows[0];
        assert_eq!(row.layers.len(), 1);
        assert!((row.total - series[0].total()).abs() < 1e-10);
        assert!((row.layers[0].height() - series[0].get("indeed")).abs() < 1e-10);
        assert_eq!(row.total.round() as i64, sum_projection(&series));
    }

    #[test]
    fn test_layer_height() {
        let layer = Layer {
            key: "indeed".to_string(),
            y0: 2.5,
            y1: 7.0,
        };
        assert!((layer.height() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_max_y_floor() {
        let sources = [Source::new("indeed", 0.0, 10.0)];
        let series = project_daily_applicants(&sources, date(2025, 11, 1), date(2025, 11, 3));
        let chart = stack_series(&series, &sources);
        assert!((chart.max_y - 1.0).abs() < 1e-10);
        assert!(chart.rows.iter().all(|r| r.layers.is_empty()));
    }

    #[test]
    fn test_empty_series() {
        let chart = stack_series(&[], &default_sources());
        assert!(chart.rows.is_empty());
        assert!((chart.max_y - 1.0).abs() < 1e-10);
    }
}
