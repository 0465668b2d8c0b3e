use core::fmt;

/// A variable identifier raised to an integer power, like `x^2` or `y^-1`.
///
/// No validation is done on the identifier or power; a power of 0 is pruned by the owning
/// [Term](crate::Term).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Variable {
    identifier: String,
    power: i32,
}

impl Variable {
    pub fn new<S: Into<String>>(identifier: S, power: i32) -> Self {
        Self {
            identifier: identifier.into(),
            power,
        }
    }

    /// `identifier^1`.
    pub fn linear<S: Into<String>>(identifier: S) -> Self {
        Self::new(identifier, 1)
    }

    /// Whether `self` and `other` have the same identifier and power.
    #[inline]
    pub fn compare(&self, other: &Variable) -> bool {
        self == other
    }

    /// Whether `self` and `other` occupy the same slot in a term, regardless of power.
    #[inline]
    pub fn same_identifier(&self, other: &Variable) -> bool {
        self.identifier == other.identifier
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn set_identifier<S: Into<String>>(&mut self, identifier: S) {
        self.identifier = identifier.into();
    }

    #[inline]
    pub fn power(&self) -> i32 {
        self.power
    }

    #[inline]
    pub fn set_power(&mut self, power: i32) {
        self.power = power;
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.power == 1 {
            write!(f, "{}", self.identifier)
        } else {
            write!(f, "{}^{}", self.identifier, self.power)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare() {
        let x = Variable::linear("x");
        assert!(x.compare(&Variable::new("x", 1)));
        assert!(!x.compare(&Variable::new("x", 2)));
        assert!(!x.compare(&Variable::new("y", 1)));
    }

    #[test]
    fn same_identifier_ignores_power() {
        assert!(Variable::new("x", 3).same_identifier(&Variable::new("x", -1)));
        assert!(!Variable::new("x", 3).same_identifier(&Variable::new("y", 3)));
    }

    #[test]
    fn setters() {
        let mut v = Variable::linear("x");
        v.set_identifier("y");
        v.set_power(-2);
        assert_eq!(v.identifier(), "y");
        assert_eq!(v.power(), -2);
        assert_eq!(v.to_string(), "y^-2");
    }
}
