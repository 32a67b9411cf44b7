//! Damped free vibration of a single-degree-of-freedom system.
//!
//! For an underdamped system released from rest at amplitude `A₀`, the
//! displacement is approximated by
//!
//! ```text
//! x(t) = A₀ · e^(−ζ·ωₙ·t) · cos(ω_d·t),    ω_d = ωₙ·√(1 − ζ²)
//! ```
//!
//! Critically damped and overdamped systems do not oscillate and are
//! rejected rather than producing a meaningless `ω_d`.

use std::{io::Write, path::Path};

use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length, Ratio, Time},
    length::meter,
    ratio::ratio,
    time::second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    plot::{LineChart, PlotError},
};

/// Default pixel size of a saved response chart.
pub const PLOT_SIZE: (u32, u32) = (800, 600);

/// Errors produced while synthesizing or exporting a response.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// `|ζ| ≥ 1` (or ζ is not a number), so there is no damped oscillation
    /// frequency.
    #[error("system is not underdamped (damping ratio {damping_ratio})")]
    NotUnderdamped { damping_ratio: f64 },

    #[error("time horizon must be > 0 s, got {} s", .horizon.value)]
    Horizon { horizon: Time },

    #[error("at least 2 samples are required, got {samples}")]
    TooFewSamples { samples: usize },

    #[error("cannot export response")]
    Export {
        #[from]
        source: csv::Error,
    },
}

/// Parameters of a damped free vibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeVibration {
    /// Initial displacement `A₀`.
    pub amplitude: Length,
    /// Undamped natural angular frequency `ωₙ`.
    pub natural: AngularVelocity,
    pub damping_ratio: Ratio,
}

impl FreeVibration {
    /// Returns the damped angular frequency `ω_d = ωₙ·√(1 − ζ²)`.
    ///
    /// Negative ratios in `(−1, 0)` describe a growing oscillation and are
    /// accepted; `ω_d` is real for them too.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::NotUnderdamped`] for `|ζ| ≥ 1` or a NaN ratio.
    pub fn damped_angular_frequency(&self) -> Result<AngularVelocity, ResponseError> {
        let zeta = self.damping_ratio.get::<ratio>();

        if zeta.is_nan() || zeta.abs() >= 1.0 {
            return Err(ResponseError::NotUnderdamped {
                damping_ratio: zeta,
            });
        }

        Ok(self.natural * (1.0 - zeta * zeta).sqrt())
    }

    /// Evaluates the displacement at time `t`.
    ///
    /// # Errors
    ///
    /// Fails like [`damped_angular_frequency`](Self::damped_angular_frequency).
    pub fn displacement(&self, time: Time) -> Result<Length, ResponseError> {
        let omega_d = self.damped_angular_frequency()?.get::<radian_per_second>();
        Ok(self.displacement_with(omega_d, time.get::<second>()))
    }

    /// Samples the response at `samples` evenly spaced instants covering
    /// `[0, horizon]`, both ends included.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::Horizon`] if `horizon` is not strictly
    /// positive, [`ResponseError::TooFewSamples`] if `samples < 2`, or the
    /// damping errors of [`damped_angular_frequency`](Self::damped_angular_frequency).
    pub fn sample(&self, horizon: Time, samples: usize) -> Result<ResponseCurve, ResponseError> {
        if StrictlyPositive::check(&horizon).is_err() {
            return Err(ResponseError::Horizon { horizon });
        }
        if samples < 2 {
            return Err(ResponseError::TooFewSamples { samples });
        }

        let omega_d = self.damped_angular_frequency()?.get::<radian_per_second>();
        let end = horizon.get::<second>();
        let last = (samples - 1) as f64;

        let samples = (0..samples)
            .map(|i| {
                let t = end * i as f64 / last;
                ResponseSample {
                    time: Time::new::<second>(t),
                    displacement: self.displacement_with(omega_d, t),
                }
            })
            .collect();

        Ok(ResponseCurve { samples })
    }

    fn displacement_with(&self, omega_d: f64, t: f64) -> Length {
        let zeta = self.damping_ratio.get::<ratio>();
        let omega_n = self.natural.get::<radian_per_second>();

        self.amplitude * ((-zeta * omega_n * t).exp() * (omega_d * t).cos())
    }
}

/// One point of a [`ResponseCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseSample {
    pub time: Time,
    pub displacement: Length,
}

/// A sampled displacement history, ordered by time.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurve {
    samples: Vec<ResponseSample>,
}

impl ResponseCurve {
    #[must_use]
    pub fn samples(&self) -> &[ResponseSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time of the last sample.
    #[must_use]
    pub fn horizon(&self) -> Time {
        self.samples
            .last()
            .map_or_else(|| Time::new::<second>(0.0), |sample| sample.time)
    }

    /// Largest absolute displacement over the curve.
    #[must_use]
    pub fn peak(&self) -> Length {
        self.samples
            .iter()
            .map(|sample| sample.displacement.abs())
            .fold(Length::new::<meter>(0.0), |peak, x| if x > peak { x } else { peak })
    }

    /// Writes the curve as two-column CSV, SI units, with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::Export`] if writing fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ResponseError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["time [s]", "displacement [m]"])?;

        for sample in &self.samples {
            csv.write_record(&[
                sample.time.get::<second>().to_string(),
                sample.displacement.get::<meter>().to_string(),
            ])?;
        }

        csv.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Renders the curve as a PNG chart at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError`] if the curve is empty or the image cannot be written.
    pub fn save_png(&self, path: impl AsRef<Path>, size: (u32, u32)) -> Result<(), PlotError> {
        let points: Vec<(f64, f64)> = self
            .samples
            .iter()
            .map(|sample| (sample.time.get::<second>(), sample.displacement.get::<meter>()))
            .collect();

        LineChart {
            caption: "Response x(t)",
            x_label: "Time (s)",
            y_label: "Displacement (m)",
        }
        .render(path, size, &points)
    }

    /// Writes the curve to a CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::Export`] if the file cannot be created or written.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<(), ResponseError> {
        let file = std::fs::File::create(path).map_err(csv::Error::from)?;
        self.write_csv(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn vibration(zeta: f64) -> FreeVibration {
        FreeVibration {
            amplitude: Length::new::<meter>(0.01),
            natural: AngularVelocity::new::<radian_per_second>(14.142_135_6),
            damping_ratio: Ratio::new::<ratio>(zeta),
        }
    }

    fn seconds(value: f64) -> Time {
        Time::new::<second>(value)
    }

    #[test]
    fn starts_at_amplitude_with_inclusive_spacing() {
        let curve = vibration(0.2).sample(seconds(5.0), 2000).unwrap();

        assert_eq!(curve.len(), 2000);
        let first = curve.samples()[0];
        assert_eq!(first.time.get::<second>(), 0.0);
        assert_relative_eq!(first.displacement.get::<meter>(), 0.01);
        assert_relative_eq!(curve.horizon().get::<second>(), 5.0);

        let dt = curve.samples()[1].time.get::<second>();
        assert_relative_eq!(dt, 5.0 / 1999.0);
    }

    #[test]
    fn damped_frequency() {
        let omega_d = vibration(0.6).damped_angular_frequency().unwrap();
        assert_relative_eq!(
            omega_d.get::<radian_per_second>(),
            14.142_135_6 * 0.8,
            max_relative = 1e-12
        );

        let undamped = vibration(0.0).damped_angular_frequency().unwrap();
        assert_relative_eq!(undamped.get::<radian_per_second>(), 14.142_135_6);
    }

    #[test]
    fn envelope_bounds_the_response() {
        let v = vibration(0.2);
        let curve = v.sample(seconds(5.0), 500).unwrap();

        for sample in curve.samples() {
            let t = sample.time.get::<second>();
            let envelope = 0.01 * (-0.2 * 14.142_135_6 * t).exp();
            assert!(sample.displacement.get::<meter>().abs() <= envelope + 1e-15);
        }
        assert_relative_eq!(curve.peak().get::<meter>(), 0.01);
    }

    #[test]
    fn matches_pointwise_evaluation() {
        let v = vibration(0.35);
        let curve = v.sample(seconds(2.0), 11).unwrap();
        let sample = curve.samples()[7];

        let direct = v.displacement(sample.time).unwrap();
        assert_relative_eq!(direct.get::<meter>(), sample.displacement.get::<meter>());
    }

    #[test]
    fn non_underdamped_systems_are_rejected() {
        for zeta in [1.0, 1.5, -1.0, -2.0, f64::NAN] {
            assert!(matches!(
                vibration(zeta).sample(seconds(5.0), 100),
                Err(ResponseError::NotUnderdamped { .. })
            ));
        }
    }

    #[test]
    fn negative_damping_grows() {
        let v = vibration(-0.1);
        let omega_d = v.damped_angular_frequency().unwrap();
        assert_relative_eq!(
            omega_d.get::<radian_per_second>(),
            14.142_135_6 * 0.99_f64.sqrt(),
            max_relative = 1e-12
        );

        let curve = v.sample(seconds(5.0), 2000).unwrap();
        assert!(curve.peak().get::<meter>() > 0.01);
    }

    #[test]
    fn invalid_sampling() {
        assert!(matches!(
            vibration(0.2).sample(seconds(0.0), 100),
            Err(ResponseError::Horizon { .. })
        ));
        assert!(matches!(
            vibration(0.2).sample(seconds(5.0), 1),
            Err(ResponseError::TooFewSamples { samples: 1 })
        ));
    }

    #[test]
    fn csv_has_header_and_one_line_per_sample() {
        let curve = vibration(0.2).sample(seconds(1.0), 3).unwrap();
        let mut buffer = Vec::new();
        curve.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "time [s],displacement [m]");
        assert_eq!(lines[1], "0,0.01");
        assert!(lines[3].starts_with("1,"));
    }
}
