//! Fourier series coefficient model.
//!
//! Derives the harmonic terms for the selected waveform as a pure function
//! of the circle count. Each term pairs an integer frequency multiplier
//! with a signed amplitude; the preset selects the formula family.

use std::f64::consts::PI;

/// Waveform preset selecting the coefficient formula family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WavePreset {
    /// Odd harmonics, amplitude `4/(nπ)`.
    Square,
    /// All harmonics, amplitude `2/(nπ)·(−1)^(n+1)`.
    Sawtooth,
    /// Odd harmonics, amplitude `8/(n²π²)·(−1)^((n−1)/2)`.
    Triangle,
}

impl WavePreset {
    /// Human-readable label for the preset button.
    pub fn label(&self) -> &'static str {
        match self {
            WavePreset::Square => "Square Wave",
            WavePreset::Sawtooth => "Sawtooth Wave",
            WavePreset::Triangle => "Triangle Wave",
        }
    }
}

/// One sinusoidal component of the series.
///
/// Immutable once generated for a given circle count; the whole term list
/// is regenerated whenever the circle count or preset changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarmonicTerm {
    /// Integer frequency multiplier.
    pub n: u32,
    /// Signed series coefficient.
    pub amplitude: f64,
}

/// Generate the series terms for `preset` truncated to `circle_count` terms.
///
/// Deterministic and pure. A circle count below 1 is clamped rather than
/// rejected: interactive controls must never be able to produce an invalid
/// term list.
pub fn generate_terms(preset: WavePreset, circle_count: u32) -> Vec<HarmonicTerm> {
    let count = circle_count.max(1);
    (0..count)
        .map(|i| match preset {
            WavePreset::Square => {
                let n = 2 * i + 1;
                HarmonicTerm {
                    n,
                    amplitude: 4.0 / (n as f64 * PI),
                }
            }
            WavePreset::Sawtooth => {
                let n = i + 1;
                let sign = if n % 2 == 1 { 1.0 } else { -1.0 };
                HarmonicTerm {
                    n,
                    amplitude: sign * 2.0 / (n as f64 * PI),
                }
            }
            WavePreset::Triangle => {
                let n = 2 * i + 1;
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                HarmonicTerm {
                    n,
                    amplitude: sign * 8.0 / ((n * n) as f64 * PI * PI),
                }
            }
        })
        .collect()
}

/// Sum of the absolute term amplitudes, i.e. the worst-case chain extent in
/// units of the base radius. Used by the layout to anchor the chain.
pub fn total_amplitude(terms: &[HarmonicTerm]) -> f64 {
    terms.iter().map(|t| t.amplitude.abs()).sum()
}
