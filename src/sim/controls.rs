//! Slider-to-CSS mappings for the static illustrations
//!
//! These sliders don't drive a canvas; they restyle CSS-animated elements
//! (heat distribution, spring/mass keyframes, flexure beam).

/// Lower bound of every temperature slider (°C)
pub const AMBIENT_TEMPERATURE: f64 = 20.0;
/// Landing page temperature slider span (20..200 °C)
pub const HERO_TEMPERATURE_SPAN: f64 = 180.0;
/// Article thermal demo span (20..100 °C)
pub const DEMO_TEMPERATURE_SPAN: f64 = 80.0;

/// Frequency the spring keyframes were authored at (Hz)
const SPRING_REFERENCE_HZ: f64 = 5.0;
/// Keyframe duration at the reference frequency (s)
const SPRING_REFERENCE_SECS: f64 = 2.0;
const MIN_FREQUENCY_HZ: f64 = 0.01;

/// Degrees of beam rotation per millimetre of deflection
const FLEXURE_DEG_PER_MM: f64 = 2.0;

/// Normalized heat intensity for a temperature over a slider span
pub fn heat_intensity(temperature: f64, span: f64) -> f64 {
    (temperature - AMBIENT_TEMPERATURE) / span
}

pub fn temperature_label(temperature: f64) -> String {
    format!("{}°C", trim_number(temperature))
}

pub fn frequency_label(hz: f64) -> String {
    format!("{} Hz", trim_number(hz))
}

pub fn deflection_label(mm: f64) -> String {
    format!("{} mm", trim_number(mm))
}

/// CSS `filter` for `.heat-distribution`
pub fn heat_filter(temperature: f64) -> String {
    let intensity = heat_intensity(temperature, HERO_TEMPERATURE_SPAN);
    format!("brightness({})", trim_number(1.0 + intensity * 0.5))
}

/// CSS `background` for the article's `.heat-map`
pub fn heat_map_gradient(temperature: f64) -> String {
    let intensity = heat_intensity(temperature, DEMO_TEMPERATURE_SPAN);
    let hot = 0.3 + intensity * 0.5;
    let cool = 0.3 + intensity * 0.3;
    format!(
        "radial-gradient(circle at center, rgba(239, 68, 68, {}) 0%, rgba(59, 130, 246, {}) 50%, rgba(34, 197, 94, 0.2) 100%)",
        trim_number(hot),
        trim_number(cool)
    )
}

/// Keyframe duration (seconds) for the spring/mass illustration
pub fn spring_animation_secs(hz: f64) -> f64 {
    SPRING_REFERENCE_SECS / (hz.max(MIN_FREQUENCY_HZ) / SPRING_REFERENCE_HZ)
}

/// CSS `transform` for `.flexure-beam`
pub fn flexure_transform(deflection_mm: f64) -> String {
    format!("rotate({}deg)", trim_number(deflection_mm * FLEXURE_DEG_PER_MM))
}

/// Shortest decimal rendering, without float noise like `0.30000000000000004`
pub fn trim_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let mut s = format!("{rounded:.6}");
        while s.ends_with('0') {
            s.pop();
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(temperature_label(50.0), "50°C");
        assert_eq!(frequency_label(2.5), "2.5 Hz");
        assert_eq!(deflection_label(3.0), "3 mm");
    }

    #[test]
    fn test_heat_filter() {
        assert_eq!(heat_filter(20.0), "brightness(1)");
        assert_eq!(heat_filter(200.0), "brightness(1.5)");
    }

    #[test]
    fn test_heat_map_gradient_endpoints() {
        let cold = heat_map_gradient(20.0);
        assert!(cold.contains("rgba(239, 68, 68, 0.3)"));
        assert!(cold.contains("rgba(59, 130, 246, 0.3)"));

        let hot = heat_map_gradient(100.0);
        assert!(hot.contains("rgba(239, 68, 68, 0.8)"));
        assert!(hot.contains("rgba(59, 130, 246, 0.6)"));
    }

    #[test]
    fn test_spring_duration() {
        assert_eq!(spring_animation_secs(5.0), 2.0);
        assert_eq!(spring_animation_secs(10.0), 1.0);
        assert!(spring_animation_secs(0.0).is_finite());
    }

    #[test]
    fn test_flexure_transform() {
        assert_eq!(flexure_transform(1.5), "rotate(3deg)");
        assert_eq!(flexure_transform(-0.25), "rotate(-0.5deg)");
    }

    #[test]
    fn test_trim_number() {
        assert_eq!(trim_number(0.1 + 0.2), "0.3");
        assert_eq!(trim_number(-4.0), "-4");
        assert_eq!(trim_number(6.28), "6.28");
    }
}
