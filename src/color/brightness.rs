//! Brightness comparison and adjustment
//!
//! All operations compare the hsv value (third component) of two colors and,
//! when the required gap is missing, move the value of `self` while keeping
//! its hue and saturation. Moving goes through the hsv setter, so alpha is
//! reset to 1 whenever a color actually changes.

use tracing::{debug, trace};

use super::value::Color;
use crate::config::ContrastConfig;
use crate::constants::hsv;

impl Color {
    /// Make this color at least `difference` brighter than `other`
    ///
    /// No-op if the value is already `>= other.value + difference`; otherwise
    /// the value becomes `other.value + difference`, capped at 360.
    pub fn brighter_than(&mut self, other: &Color, difference: f64) -> &mut Self {
        self.raise_value(other.value(), difference, hsv::VALUE_CEILING)
    }

    /// Make this color at least `difference` darker than `other`
    ///
    /// No-op if the value is already `<= other.value - difference`; otherwise
    /// the value becomes `other.value - difference`, floored at 0.
    pub fn darker_than(&mut self, other: &Color, difference: f64) -> &mut Self {
        self.lower_value(other.value(), difference, hsv::VALUE_FLOOR)
    }

    /// Push this color away from `other` in whichever direction it already
    /// leans
    ///
    /// Equal values count as darker.
    pub fn brighter_or_darker_than(&mut self, other: &Color, difference: f64) -> &mut Self {
        if self.value() <= other.value() {
            self.darker_than(other, difference)
        } else {
            self.brighter_than(other, difference)
        }
    }

    /// [`brighter_or_darker_than`](Self::brighter_or_darker_than) with the
    /// gap and value bounds taken from `config`
    pub fn contrast_with(&mut self, other: &Color, config: &ContrastConfig) -> &mut Self {
        let target = other.value();

        if self.value() <= target {
            self.lower_value(target, config.difference, config.value_floor)
        } else {
            self.raise_value(target, config.difference, config.value_ceiling)
        }
    }

    fn raise_value(&mut self, target: f64, difference: f64, ceiling: f64) -> &mut Self {
        let mut hsv = self.hsv();

        if hsv[2] >= target + difference {
            trace!(value = hsv[2], target, difference, "Already bright enough");
            return self;
        }

        hsv[2] = (target + difference).min(ceiling);
        debug!(value = hsv[2], target, difference, "Brightening color");
        self.set_hsv_triplet(hsv);
        self
    }

    fn lower_value(&mut self, target: f64, difference: f64, floor: f64) -> &mut Self {
        let mut hsv = self.hsv();

        if hsv[2] <= target - difference {
            trace!(value = hsv[2], target, difference, "Already dark enough");
            return self;
        }

        hsv[2] = (target - difference).max(floor);
        debug!(value = hsv[2], target, difference, "Darkening color");
        self.set_hsv_triplet(hsv);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(value: f64) -> Color {
        Color::from_hsv([0.0, 0.0, value])
    }

    #[test]
    fn test_brighter_than_noop_when_far_enough() {
        let mut a = Color::new("hsv(0,0,50)").unwrap();
        let b = Color::new("hsv(0,0,40)").unwrap();
        a.set_alpha(0.5).unwrap();

        a.brighter_than(&b, 5.0);
        assert_eq!(a.hsv()[2], 50.0);
        assert_eq!(a.alpha(), 0.5);
    }

    #[test]
    fn test_brighter_than_raises_value() {
        let mut a = Color::from_hsv([200.0, 40.0, 30.0]);
        a.brighter_than(&gray(40.0), 15.0);
        assert_eq!(a.hsv(), [200.0, 40.0, 55.0]);
    }

    #[test]
    fn test_brighter_than_clamps_to_ceiling() {
        let mut a = Color::new("hsv(0,0,10)").unwrap();
        let b = Color::new("hsv(0,0,358)").unwrap();
        a.brighter_than(&b, 10.0);
        assert_eq!(a.hsv()[2], 360.0);
    }

    #[test]
    fn test_darker_than_lowers_value() {
        let mut a = Color::from_hsv([10.0, 20.0, 80.0]);
        a.darker_than(&gray(60.0), 25.0);
        assert_eq!(a.hsv(), [10.0, 20.0, 35.0]);
    }

    #[test]
    fn test_darker_than_noop_when_far_enough() {
        let mut a = gray(20.0);
        a.darker_than(&gray(60.0), 25.0);
        assert_eq!(a.value(), 20.0);
    }

    #[test]
    fn test_darker_than_clamps_to_floor() {
        let mut a = gray(30.0);
        a.darker_than(&gray(10.0), 25.0);
        assert_eq!(a.value(), 0.0);
    }

    #[test]
    fn test_mutation_resets_alpha() {
        let mut a = Color::new("rgba(10,10,10,0.4)").unwrap();
        a.brighter_than(&gray(90.0), 5.0);
        assert_eq!(a.alpha(), 1.0);
        assert_eq!(a.value(), 95.0);
    }

    #[test]
    fn test_brighter_or_darker_tie_goes_darker() {
        let mut a = gray(50.0);
        a.brighter_or_darker_than(&gray(50.0), 10.0);
        assert_eq!(a.value(), 40.0);
    }

    #[test]
    fn test_brighter_or_darker_picks_direction() {
        let mut brighter = gray(55.0);
        brighter.brighter_or_darker_than(&gray(50.0), 10.0);
        assert_eq!(brighter.value(), 60.0);

        let mut darker = gray(45.0);
        darker.brighter_or_darker_than(&gray(50.0), 10.0);
        assert_eq!(darker.value(), 40.0);
    }

    #[test]
    fn test_chaining() {
        let mut a = gray(50.0);
        a.brighter_than(&gray(60.0), 5.0).darker_than(&gray(90.0), 5.0);
        assert_eq!(a.value(), 65.0);
    }

    #[test]
    fn test_contrast_with_custom_ceiling() {
        let config = ContrastConfig {
            difference: 30.0,
            value_ceiling: 100.0,
            value_floor: 0.0,
        };

        let mut a = gray(90.0);
        a.contrast_with(&gray(85.0), &config);
        assert_eq!(a.value(), 100.0);

        let mut b = gray(20.0);
        b.contrast_with(&gray(40.0), &config);
        assert_eq!(b.value(), 10.0);
    }
}
