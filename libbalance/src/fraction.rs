use crate::errors::{AlgebraError, AlgebraResult};
use crate::math::coefficient_gcd;
use crate::Term;

/// A [Term] divided by a [Term], like `3x / 2y`.
///
/// A fraction exclusively owns its numerator and denominator. Cloning a fraction yields a fully
/// independent value.
#[derive(Clone, PartialEq, Debug)]
pub struct Fraction {
    numerator: Term,
    denominator: Term,
}

impl Fraction {
    /// Creates `numerator / denominator`, failing if the denominator's coefficient is zero.
    pub fn new(numerator: Term, denominator: Term) -> AlgebraResult<Self> {
        if denominator.coefficient().is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// A fraction with no variables and a denominator of `1`.
    pub fn constant(value: f64) -> Self {
        Term::constant(value).into()
    }

    /// The fraction `0 / 1`.
    pub fn zero() -> Self {
        Self::constant(0.)
    }

    #[inline]
    pub fn numerator(&self) -> &Term {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &Term {
        &self.denominator
    }

    /// Whether the numerator's coefficient is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.coefficient().is_zero()
    }

    /// Whether the denominator is the multiplicative identity.
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.denominator.is_one()
    }

    /// Whether either the numerator or the denominator has a variable `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.numerator.contains(identifier) || self.denominator.contains(identifier)
    }

    /// The product of the numerator and denominator signs.
    pub fn sign(&self) -> i8 {
        self.numerator.sign() * self.denominator.sign()
    }

    /// Two fractions are similar if their numerators are similar and their denominators are
    /// similar.
    pub fn is_similar(&self, other: &Fraction) -> bool {
        self.numerator.is_similar(&other.numerator)
            && self.denominator.is_similar(&other.denominator)
    }

    /// Reduces the fraction by
    ///
    /// 1. dividing both coefficients by their GCD, when both are integral,
    /// 2. cancelling the common power of every variable shared by the numerator and denominator,
    /// 3. pruning variables left with a power of 0.
    ///
    /// `simplify` is idempotent. When both coefficients are zero the GCD is taken to be 1, so
    /// the coefficients are left unchanged.
    ///
    /// ```
    /// use libbalance::{Fraction, Term};
    ///
    /// let mut six_ninths = Fraction::new(Term::constant(6.), Term::constant(9.)).unwrap();
    /// six_ninths.simplify();
    /// assert_eq!(six_ninths, Fraction::new(Term::constant(2.), Term::constant(3.)).unwrap());
    /// ```
    pub fn simplify(&mut self) {
        let num = self.numerator.coefficient().value();
        let den = self.denominator.coefficient().value();
        if let Some(gcd) = coefficient_gcd(num, den) {
            let gcd = gcd as f64;
            self.numerator.coefficient_mut().set_value(num / gcd);
            self.denominator.coefficient_mut().set_value(den / gcd);
        }

        let numerator = &mut self.numerator;
        for den_var in self.denominator.variables_mut().iter_mut() {
            let num_var = match numerator
                .variables_mut()
                .iter_mut()
                .find(|v| v.identifier() == den_var.identifier())
            {
                Some(v) => v,
                None => continue,
            };
            let common = den_var.power().min(num_var.power());
            den_var.set_power(den_var.power() - common);
            num_var.set_power(num_var.power() - common);
        }

        self.numerator.normalize();
        self.denominator.normalize();
    }

    /// Adds a similar fraction to `self` by cross-multiplication:
    ///
    /// ```text
    /// a   c   a*d + c*b
    /// - + - = ---------
    /// b   d      b*d
    /// ```
    ///
    /// The result is not simplified. Fails without modifying `self` if `other` is not similar.
    pub fn add(&mut self, other: &Fraction) -> AlgebraResult<()> {
        if !self.is_similar(other) {
            return Err(AlgebraError::IncompatibleFractions);
        }

        let mut other_numerator = other.numerator.clone();
        other_numerator.multiply(&self.denominator);

        let mut numerator = self.numerator.clone();
        numerator.multiply(&other.denominator);
        let mut denominator = self.denominator.clone();
        denominator.multiply(&other.denominator);

        // Similar numerators over similar denominators stay similar once cross-multiplied.
        numerator.add(&other_numerator)?;

        self.numerator = numerator;
        self.denominator = denominator;
        Ok(())
    }

    /// Multiplies `self` by `other` and simplifies the result.
    pub fn multiply(&mut self, other: &Fraction) {
        self.numerator.multiply(&other.numerator);
        self.denominator.multiply(&other.denominator);
        self.simplify();
    }

    /// Divides `self` by `other`, i.e. multiplies `self` by the reciprocal of `other`, and
    /// simplifies the result. Fails without modifying `self` if `other` is zero.
    pub fn divide(&mut self, other: &Fraction) -> AlgebraResult<()> {
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        self.numerator.multiply(&other.denominator);
        self.denominator.multiply(&other.numerator);
        self.simplify();
        Ok(())
    }
}

impl From<Term> for Fraction {
    fn from(numerator: Term) -> Self {
        Self {
            numerator,
            denominator: Term::one(),
        }
    }
}
