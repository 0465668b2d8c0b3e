//! Linear equations as two sides of fractions, and the reduction of an [Operation] over them.

use crate::errors::{AlgebraError, AlgebraResult};
use crate::operation::{Operation, UNKNOWN};
use crate::Fraction;

use tracing::debug;

/// One side of an equation: an ordered sum of fractions. Insertion order is display order.
///
/// A side is never empty once an operation has been applied to it; a side whose fractions all
/// cancel holds a single `0`.
#[derive(Clone, PartialEq, Debug)]
pub struct Side {
    fractions: Vec<Fraction>,
}

impl Side {
    pub fn new(fractions: Vec<Fraction>) -> Self {
        Self { fractions }
    }

    #[inline]
    pub fn fractions(&self) -> &[Fraction] {
        &self.fractions
    }

    /// Whether any fraction on the side has the variable `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.fractions.iter().any(|f| f.contains(identifier))
    }

    /// Adds `other` to the side, combining it with the first similar fraction if there is one
    /// and appending a copy of it otherwise.
    pub fn add(&mut self, other: &Fraction) -> AlgebraResult<()> {
        match self.fractions.iter_mut().find(|f| f.is_similar(other)) {
            Some(like) => like.add(other),
            None => {
                self.fractions.push(other.clone());
                Ok(())
            }
        }
    }

    /// Multiplies every fraction on the side by `other`.
    pub fn multiply(&mut self, other: &Fraction) {
        for fraction in self.fractions.iter_mut() {
            fraction.multiply(other);
        }
    }

    /// Divides every fraction on the side by `other`. Fails without modifying the side if
    /// `other` is zero.
    pub fn divide(&mut self, other: &Fraction) -> AlgebraResult<()> {
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        for fraction in self.fractions.iter_mut() {
            fraction.divide(other)?;
        }
        Ok(())
    }

    /// Drops every fraction with a zero numerator. If nothing is left, the side becomes `0`.
    pub fn remove_zeroes(&mut self) {
        self.fractions.retain(|f| !f.is_zero());
        if self.fractions.is_empty() {
            self.fractions.push(Fraction::zero());
        }
    }
}

impl From<Fraction> for Side {
    fn from(fraction: Fraction) -> Self {
        Self::new(vec![fraction])
    }
}

/// An equation `left = right` in the unknown [x](UNKNOWN).
#[derive(Clone, PartialEq, Debug)]
pub struct Equation {
    pub left: Side,
    pub right: Side,
}

impl Equation {
    pub fn new<L: Into<Side>, R: Into<Side>>(left: L, right: R) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Applies `operation` to both sides of the equation.
    ///
    /// Additions combine like terms on each side; multiplications and divisions apply to every
    /// fraction. Afterwards zero fractions are dropped from both sides.
    ///
    /// Fails without modifying the equation if the operation divides by zero.
    pub fn apply(&mut self, operation: &Operation) -> AlgebraResult<()> {
        let operand = operation.to_fraction();
        match operation {
            Operation::Add(_) | Operation::Subtract(_) => {
                // Cross-multiplied similar fractions are always addable, so a failure here
                // happens before either side changes.
                let mut left = self.left.clone();
                let mut right = self.right.clone();
                left.add(&operand)?;
                right.add(&operand)?;
                self.left = left;
                self.right = right;
            }
            Operation::Multiply(_) => {
                self.left.multiply(&operand);
                self.right.multiply(&operand);
            }
            Operation::Divide(_) => {
                if operand.is_zero() {
                    return Err(AlgebraError::DivisionByZero);
                }
                self.left.divide(&operand)?;
                self.right.divide(&operand)?;
            }
        }
        self.left.remove_zeroes();
        self.right.remove_zeroes();

        debug!(%operation, equation = %self, "applied operation");
        Ok(())
    }

    /// Whether the equation is solved for [x](UNKNOWN): the left side is exactly `x` and the
    /// right side does not mention `x`.
    pub fn is_solved(&self) -> bool {
        if self.right.contains(UNKNOWN) {
            return false;
        }
        match self.left.fractions() {
            [only] => {
                let numerator = only.numerator();
                only.is_whole()
                    && numerator.coefficient().value() == 1.
                    && matches!(
                        numerator.variables(),
                        [v] if v.identifier() == UNKNOWN && v.power() == 1
                    )
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operand;
    use crate::{Term, Variable};

    fn x_term(coefficient: f64) -> Fraction {
        Term::new(coefficient, vec![Variable::linear("x")]).into()
    }

    fn add(n: i64) -> Operation {
        Operation::Add(Operand::Constant(n))
    }

    fn add_x() -> Operation {
        Operation::Add(Operand::Variable("x".into()))
    }

    #[test]
    fn like_terms_combine() {
        let mut side = Side::from(Fraction::constant(5.));
        side.add(&Fraction::constant(2.)).unwrap();
        assert_eq!(side, Side::from(Fraction::constant(7.)));
    }

    #[test]
    fn unlike_terms_append() {
        let mut equation = Equation::new(x_term(1.), Fraction::constant(5.));
        equation.apply(&add_x()).unwrap();
        equation.apply(&add_x()).unwrap();
        assert_eq!(
            equation.right,
            Side::new(vec![Fraction::constant(5.), x_term(2.)])
        );
        assert_eq!(equation.left, Side::from(x_term(3.)));
    }

    #[test]
    fn appended_fractions_are_copies() {
        let operand = x_term(1.);
        let mut side = Side::from(Fraction::constant(1.));
        side.add(&operand).unwrap();
        side.add(&operand).unwrap();
        assert_eq!(operand, x_term(1.));
    }

    #[test]
    fn cancelled_fractions_are_removed() {
        let mut equation = Equation::new(
            Side::new(vec![x_term(1.), Fraction::constant(3.)]),
            Fraction::constant(3.),
        );
        equation
            .apply(&Operation::Subtract(Operand::Constant(3)))
            .unwrap();
        assert_eq!(equation.left, Side::from(x_term(1.)));
        assert_eq!(equation.right, Side::from(Fraction::zero()));
    }

    #[test]
    fn empty_side_holds_zero() {
        let mut side = Side::from(Fraction::constant(3.));
        side.add(&Fraction::constant(-3.)).unwrap();
        side.remove_zeroes();
        assert_eq!(side.fractions(), &[Fraction::zero()]);
    }

    #[test]
    fn multiply_applies_to_every_fraction() {
        let mut equation = Equation::new(
            Side::new(vec![x_term(1.), Fraction::constant(1.)]),
            Fraction::constant(4.),
        );
        equation
            .apply(&Operation::Multiply(Operand::Constant(3)))
            .unwrap();
        assert_eq!(
            equation.left,
            Side::new(vec![x_term(3.), Fraction::constant(3.)])
        );
        assert_eq!(equation.right, Side::from(Fraction::constant(12.)));
    }

    #[test]
    fn divide_by_variable() {
        let mut equation = Equation::new(x_term(2.), Fraction::constant(4.));
        equation
            .apply(&Operation::Divide(Operand::Variable("x".into())))
            .unwrap();
        assert_eq!(equation.left, Side::from(Fraction::constant(2.)));
        assert_eq!(
            equation.right,
            Side::from(Fraction::new(Term::constant(4.), x_term(1.).numerator().clone()).unwrap())
        );
    }

    #[test]
    fn divide_by_zero_fails_without_mutation() {
        let original = Equation::new(x_term(2.), Fraction::constant(4.));
        let mut equation = original.clone();
        assert_eq!(
            equation.apply(&Operation::Divide(Operand::Constant(0))),
            Err(AlgebraError::DivisionByZero)
        );
        assert_eq!(equation, original);
    }

    #[test]
    fn subtract_smallest_constant() {
        let mut equation = Equation::new(x_term(1.), Fraction::zero());
        equation
            .apply(&Operation::Subtract(Operand::Constant(i64::MIN)))
            .unwrap();
        let two_pow_63 = 9_223_372_036_854_775_808.;
        assert_eq!(
            equation.left,
            Side::new(vec![x_term(1.), Fraction::constant(two_pow_63)])
        );
        assert_eq!(equation.right, Side::from(Fraction::constant(two_pow_63)));
    }

    #[test]
    fn solving_step_by_step() {
        // 2x + 1 = 7
        let mut equation = Equation::new(
            Side::new(vec![x_term(2.), Fraction::constant(1.)]),
            Fraction::constant(7.),
        );
        assert!(!equation.is_solved());
        equation.apply(&add(-1)).unwrap();
        assert!(!equation.is_solved());
        equation
            .apply(&Operation::Divide(Operand::Constant(2)))
            .unwrap();
        assert!(equation.is_solved());
        assert_eq!(equation.right, Side::from(Fraction::constant(3.)));
    }

    #[test]
    fn solved_with_fractional_answer() {
        let equation = Equation::new(
            x_term(1.),
            Fraction::new(Term::constant(7.), Term::constant(2.)).unwrap(),
        );
        assert!(equation.is_solved());
    }

    macro_rules! unsolved_tests {
        ($($name:ident: $left:expr, $right:expr;)*) => {
        $(
            #[test]
            fn $name() {
                assert!(!Equation::new($left, $right).is_solved());
            }
        )*
        }
    }

    unsolved_tests! {
        unsolved_x_on_right:
            x_term(1.), Side::new(vec![Fraction::constant(7.), x_term(1.)]);
        unsolved_x_in_right_denominator:
            x_term(1.), Fraction::new(Term::constant(1.), Term::new(1., vec![Variable::linear("x")])).unwrap();
        unsolved_coefficient:
            x_term(2.), Fraction::constant(7.);
        unsolved_negative_x:
            x_term(-1.), Fraction::constant(7.);
        unsolved_denominator:
            Fraction::new(Term::new(1., vec![Variable::linear("x")]), Term::constant(2.)).unwrap(), Fraction::constant(7.);
        unsolved_squared:
            Fraction::from(Term::new(1., vec![Variable::new("x", 2)])), Fraction::constant(7.);
        unsolved_two_fractions:
            Side::new(vec![x_term(1.), Fraction::constant(1.)]), Fraction::constant(7.);
        unsolved_constant_left:
            Fraction::constant(7.), x_term(1.);
    }

    #[test]
    fn solved_predicate() {
        assert!(Equation::new(x_term(1.), Fraction::constant(7.)).is_solved());
    }
}
