//! PNG line charts.
//!
//! A thin layer over [`plotters`] for the single chart type this crate
//! needs: one line series over a grid, with a caption and axis labels.

use std::{fmt::Display, path::Path};

use plotters::prelude::*;
use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot")]
    Empty,

    /// The backend failed to draw or write the image.
    #[error("cannot render {path}: {message}")]
    Drawing { path: String, message: String },
}

/// Labels of a line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChart<'a> {
    pub caption: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

impl LineChart<'_> {
    /// Draws `points` as a single line and writes the chart to `path` as PNG.
    ///
    /// Axis ranges are fitted to the data; the y range is symmetric about zero.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Empty`] if `points` is empty, or
    /// [`PlotError::Drawing`] if the backend fails.
    pub fn render(
        &self,
        path: impl AsRef<Path>,
        size: (u32, u32),
        points: &[(f64, f64)],
    ) -> Result<(), PlotError> {
        let path = path.as_ref();
        if points.is_empty() {
            return Err(PlotError::Empty);
        }
        let failed = |err: &dyn Display| PlotError::Drawing {
            path: path.display().to_string(),
            message: err.to_string(),
        };

        let (x_min, x_max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
                (lo.min(x), hi.max(x))
            });
        let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };
        let peak = points.iter().fold(0.0_f64, |peak, &(_, y)| peak.max(y.abs()));
        let y_max = if peak > 0.0 { peak * 1.05 } else { 1.0 };

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(|e| failed(&e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.caption, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, -y_max..y_max)
            .map_err(|e| failed(&e))?;

        chart
            .configure_mesh()
            .x_desc(self.x_label)
            .y_desc(self.y_label)
            .draw()
            .map_err(|e| failed(&e))?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
            .map_err(|e| failed(&e))?;

        root.present().map_err(|e| failed(&e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_rejected_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let chart = LineChart {
            caption: "c",
            x_label: "x",
            y_label: "y",
        };

        assert!(matches!(
            chart.render(&path, (320, 240), &[]),
            Err(PlotError::Empty)
        ));
        assert!(!path.exists());
    }
}
