use crate::config;

/// Randomized look of one decorative particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    pub width_px: f64,
    pub height_px: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub delay_secs: f64,
}

impl ParticleStyle {
    /// Builds a style for particle `index` from a source of uniform samples
    /// in `[0, 1)`.
    pub fn from_samples(index: usize, mut sample: impl FnMut() -> f64) -> Self {
        Self {
            width_px: sample() * 4.0 + 1.0,
            height_px: sample() * 4.0 + 1.0,
            top_pct: sample() * 100.0,
            left_pct: sample() * 100.0,
            delay_secs: stagger_delay(index),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "width: {:.2}px; height: {:.2}px; top: {:.2}%; left: {:.2}%; animation-delay: {:.1}s;",
            self.width_px, self.height_px, self.top_pct, self.left_pct, self.delay_secs
        )
    }
}

pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * config::PARTICLE_STAGGER_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_samples_give_smallest_particle_in_the_corner() {
        let style = ParticleStyle::from_samples(0, || 0.0);
        assert_eq!(style.width_px, 1.0);
        assert_eq!(style.height_px, 1.0);
        assert_eq!(style.top_pct, 0.0);
        assert_eq!(style.left_pct, 0.0);
        assert_eq!(style.delay_secs, 0.0);
    }

    #[test]
    fn samples_map_into_documented_ranges() {
        let samples = [0.999, 0.25, 0.5, 0.75];
        let mut next = samples.iter().copied();
        let style = ParticleStyle::from_samples(3, move || next.next().unwrap_or(0.0));
        assert!(style.width_px < 5.0 && style.width_px > 4.9);
        assert_eq!(style.height_px, 2.0);
        assert_eq!(style.top_pct, 50.0);
        assert_eq!(style.left_pct, 75.0);
    }

    #[test]
    fn delays_are_staggered() {
        assert!((stagger_delay(config::PARTICLE_COUNT - 1) - 3.8).abs() < 1e-9);
        assert!((stagger_delay(5) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn css_carries_every_field() {
        let style = ParticleStyle::from_samples(2, || 0.5);
        assert_eq!(
            style.to_css(),
            "width: 3.00px; height: 3.00px; top: 50.00%; left: 50.00%; animation-delay: 0.4s;"
        );
    }
}
