use core::fmt;

/// The signed numeric scalar of a [Term](crate::Term).
///
/// Negative zero is never stored; writing `-0` stores `0`, so that zero always has sign `0` and
/// emits as `0`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Coefficient {
    value: f64,
}

impl Coefficient {
    pub fn new(value: f64) -> Self {
        let mut coefficient = Self::default();
        coefficient.set_value(value);
        coefficient
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::new(1.)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: f64) {
        // -0 == 0, so this also normalizes negative zero.
        self.value = if value == 0. { 0. } else { value };
    }

    /// Returns -1, 0, or 1 depending on the sign of the value.
    pub fn sign(&self) -> i8 {
        if self.value > 0. {
            1
        } else if self.value < 0. {
            -1
        } else {
            0
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.
    }

    /// Whether the value is `1` or `-1`.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.value.abs() == 1.
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i64> for Coefficient {
    fn from(value: i64) -> Self {
        Self::new(value as f64)
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero() {
        assert_eq!(Coefficient::default().value(), 0.);
    }

    #[test]
    fn sign() {
        assert_eq!(Coefficient::new(-3.).sign(), -1);
        assert_eq!(Coefficient::new(0.).sign(), 0);
        assert_eq!(Coefficient::new(0.5).sign(), 1);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let mut c = Coefficient::new(-0.);
        assert_eq!(c.sign(), 0);
        assert_eq!(c.to_string(), "0");

        c.set_value(2.);
        c.set_value(c.value() * -0.);
        assert_eq!(c.to_string(), "0");
    }

    #[test]
    fn copies_are_independent() {
        let original = Coefficient::new(4.);
        let mut copy = original;
        copy.set_value(9.);
        assert_eq!(original.value(), 4.);
        assert_eq!(copy.value(), 9.);
    }

    #[test]
    fn integral_values_display_without_decimals() {
        assert_eq!(Coefficient::from(-7i64).to_string(), "-7");
        assert_eq!(Coefficient::new(1.5).to_string(), "1.5");
    }
}
