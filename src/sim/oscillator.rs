//! Mass-spring-damper demo model
//!
//! Governing equation: m·x'' + c·x' + k·x = F0·sin(ω·t)
//!
//! The drawn motion is a kinematic proxy (undamped cosine at the forcing
//! frequency). Mass, stiffness and damping feed the readouts and the
//! frequency response curve only.

use serde::{Deserialize, Serialize};

/// Displayed oscillation amplitude (pixels)
pub const DISPLAY_AMPLITUDE: f64 = 50.0;
/// Scale applied to `ω·t` in the displayed motion
pub const DISPLAY_TIME_SCALE: f64 = 0.1;
/// Local time advanced per animation frame
pub const FRAME_TIME_STEP: f64 = 0.1;

/// Frequency sweep for the response plot (rad/s)
pub const RESPONSE_SWEEP_MIN: f64 = 0.1;
pub const RESPONSE_SWEEP_MAX: f64 = 20.0;

/// Floor on the response denominator so undamped resonance stays finite
const RESPONSE_EPSILON: f64 = 1e-9;

/// One slider-bound field of [`AnimationParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    Mass,
    Stiffness,
    Damping,
    ForceAmplitude,
    ForcingFrequency,
}

/// Slider bounds for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::Mass,
        Parameter::Stiffness,
        Parameter::Damping,
        Parameter::ForceAmplitude,
        Parameter::ForcingFrequency,
    ];

    pub fn range(&self) -> ParamRange {
        match self {
            Parameter::Mass => ParamRange { min: 0.1, max: 10.0, step: 0.1 },
            Parameter::Stiffness => ParamRange { min: 1.0, max: 100.0, step: 1.0 },
            Parameter::Damping => ParamRange { min: 0.0, max: 20.0, step: 0.1 },
            Parameter::ForceAmplitude => ParamRange { min: 0.0, max: 50.0, step: 0.5 },
            Parameter::ForcingFrequency => ParamRange { min: 0.1, max: 20.0, step: 0.1 },
        }
    }

    /// Decimal places shown in the value label
    pub fn precision(&self) -> usize {
        match self {
            Parameter::Stiffness => 0,
            Parameter::ForcingFrequency => 2,
            Parameter::Mass | Parameter::Damping | Parameter::ForceAmplitude => 1,
        }
    }

    /// Label text for a value
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision(), value)
    }
}

/// Live parameters of the oscillator demo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationParameters {
    /// kg, strictly positive
    pub mass: f64,
    /// N/m
    pub stiffness: f64,
    /// N·s/m
    pub damping: f64,
    /// N
    pub force_amplitude: f64,
    /// rad/s
    pub forcing_frequency: f64,
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 10.0,
            damping: 1.0,
            force_amplitude: 10.0,
            forcing_frequency: 6.28,
        }
    }
}

impl AnimationParameters {
    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::Mass => self.mass,
            Parameter::Stiffness => self.stiffness,
            Parameter::Damping => self.damping,
            Parameter::ForceAmplitude => self.force_amplitude,
            Parameter::ForcingFrequency => self.forcing_frequency,
        }
    }

    /// Store a value clamped to the parameter's slider range.
    /// Non-finite input is ignored. Returns the stored value.
    pub fn set(&mut self, param: Parameter, value: f64) -> f64 {
        if !value.is_finite() {
            return self.get(param);
        }
        let range = param.range();
        let value = value.clamp(range.min, range.max);
        match param {
            Parameter::Mass => self.mass = value,
            Parameter::Stiffness => self.stiffness = value,
            Parameter::Damping => self.damping = value,
            Parameter::ForceAmplitude => self.force_amplitude = value,
            Parameter::ForcingFrequency => self.forcing_frequency = value,
        }
        value
    }

    /// Parse a raw slider value and store it
    pub fn set_from_input(&mut self, param: Parameter, raw: &str) -> Option<f64> {
        let value: f64 = raw.trim().parse().ok()?;
        value.is_finite().then(|| self.set(param, value))
    }

    /// ωn = sqrt(k/m)
    pub fn natural_frequency(&self) -> f64 {
        natural_frequency(self.mass, self.stiffness)
    }

    /// ζ = c / (2·sqrt(k·m))
    pub fn damping_ratio(&self) -> f64 {
        damping_ratio(self.mass, self.stiffness, self.damping)
    }

    /// Displayed mass offset (pixels) at local time `t`
    pub fn display_position(&self, t: f64) -> f64 {
        DISPLAY_AMPLITUDE * (self.forcing_frequency * t * DISPLAY_TIME_SCALE).cos()
    }

    /// Applied force F0·sin(ω·t)
    pub fn force_at(&self, t: f64) -> f64 {
        self.force_amplitude * (self.forcing_frequency * t).sin()
    }

    /// |H(ω)| for this system
    pub fn response_magnitude(&self, omega: f64) -> f64 {
        response_magnitude(self.mass, self.stiffness, self.damping, omega)
    }

    /// 20·log10 |H(ω)|
    pub fn response_db(&self, omega: f64) -> f64 {
        20.0 * self.response_magnitude(omega).log10()
    }
}

pub fn natural_frequency(mass: f64, stiffness: f64) -> f64 {
    (stiffness / mass).sqrt()
}

/// Zero when `k·m` is zero (no restoring force to compare against)
pub fn damping_ratio(mass: f64, stiffness: f64, damping: f64) -> f64 {
    let critical = 2.0 * (stiffness * mass).sqrt();
    if critical > 0.0 { damping / critical } else { 0.0 }
}

/// |H(ω)| = 1 / sqrt((k − m·ω²)² + (c·ω)²)
pub fn response_magnitude(mass: f64, stiffness: f64, damping: f64, omega: f64) -> f64 {
    let real = stiffness - mass * omega * omega;
    let imag = damping * omega;
    1.0 / real.hypot(imag).max(RESPONSE_EPSILON)
}

/// Evenly spaced (ω, dB) samples over the sweep range
pub fn response_sweep(params: &AnimationParameters, samples: usize) -> Vec<(f64, f64)> {
    if samples < 2 {
        return Vec::new();
    }
    let span = RESPONSE_SWEEP_MAX - RESPONSE_SWEEP_MIN;
    (0..samples)
        .map(|i| {
            let omega = RESPONSE_SWEEP_MIN + span * i as f64 / (samples - 1) as f64;
            (omega, params.response_db(omega))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let p = AnimationParameters::default();
        assert!((p.natural_frequency() - 3.1623).abs() < 1e-4);
        assert!((p.damping_ratio() - 0.1581).abs() < 1e-4);
    }

    #[test]
    fn test_damping_ratio_boundaries() {
        assert_eq!(damping_ratio(2.0, 8.0, 0.0), 0.0);
        let critical = 2.0 * (8.0_f64 * 2.0).sqrt();
        assert!((damping_ratio(2.0, 8.0, critical) - 1.0).abs() < 1e-12);
        assert_eq!(damping_ratio(1.0, 0.0, 3.0), 0.0);
    }

    #[test]
    fn test_set_clamps_to_range() {
        let mut p = AnimationParameters::default();
        assert_eq!(p.set(Parameter::Mass, 0.0), 0.1);
        assert_eq!(p.set(Parameter::Stiffness, 500.0), 100.0);
        assert_eq!(p.set(Parameter::Damping, f64::NAN), 1.0);
        assert_eq!(p.set_from_input(Parameter::ForcingFrequency, "12.5"), Some(12.5));
        assert_eq!(p.set_from_input(Parameter::ForcingFrequency, ""), None);
        assert_eq!(p.forcing_frequency, 12.5);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Parameter::Mass.format(1.0), "1.0");
        assert_eq!(Parameter::Stiffness.format(10.0), "10");
        assert_eq!(Parameter::ForcingFrequency.format(6.28), "6.28");
    }

    #[test]
    fn test_display_position() {
        let p = AnimationParameters::default();
        assert_eq!(p.display_position(0.0), DISPLAY_AMPLITUDE);
        let quarter = std::f64::consts::FRAC_PI_2 / (p.forcing_frequency * DISPLAY_TIME_SCALE);
        assert!(p.display_position(quarter).abs() < 1e-9);
    }

    #[test]
    fn test_response_static_and_resonant() {
        let p = AnimationParameters::default();
        assert!((p.response_magnitude(0.0) - 0.1).abs() < 1e-12);

        // Lightly damped: response near ωn beats both ends of the sweep
        let peak = p.response_magnitude(p.natural_frequency());
        assert!(peak > p.response_magnitude(RESPONSE_SWEEP_MIN));
        assert!(peak > p.response_magnitude(RESPONSE_SWEEP_MAX));

        let undamped = AnimationParameters {
            damping: 0.0,
            ..Default::default()
        };
        let at_resonance = undamped.response_db(undamped.natural_frequency());
        assert!(at_resonance.is_finite());
    }

    #[test]
    fn test_response_sweep_bounds() {
        let sweep = response_sweep(&AnimationParameters::default(), 100);
        assert_eq!(sweep.len(), 100);
        assert_eq!(sweep[0].0, RESPONSE_SWEEP_MIN);
        assert!((sweep[99].0 - RESPONSE_SWEEP_MAX).abs() < 1e-12);
        assert!(response_sweep(&AnimationParameters::default(), 1).is_empty());
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn natural_frequency_formula(m in 0.01f64..100.0, k in 0.01f64..1000.0) {
            let wn = natural_frequency(m, k);
            prop_assert!((wn * wn * m - k).abs() <= 1e-9 * k.max(1.0));
        }

        #[test]
        fn damping_ratio_formula(m in 0.01f64..100.0, k in 0.01f64..1000.0, c in 0.0f64..100.0) {
            let zeta = damping_ratio(m, k, c);
            prop_assert!(zeta >= 0.0);
            prop_assert!((zeta * 2.0 * (k * m).sqrt() - c).abs() <= 1e-9 * c.max(1.0));
        }

        #[test]
        fn response_is_positive_and_finite(
            m in 0.1f64..10.0,
            k in 1.0f64..100.0,
            c in 0.0f64..20.0,
            w in 0.0f64..20.0,
        ) {
            let h = response_magnitude(m, k, c, w);
            prop_assert!(h.is_finite());
            prop_assert!(h > 0.0);
        }
    }
}
