use crate::errors::{AlgebraError, AlgebraResult};
use crate::{Coefficient, Variable};

use core::cmp::Ordering;

/// A coefficient multiplied by a product of variable powers, like `3x^2y`.
///
/// A term exclusively owns its coefficient and variables. Its variables always
///
/// - have unique identifiers,
/// - have non-zero powers, and
/// - are kept in canonical order: descending by power, with ties broken by ascending identifier.
///
/// The canonical order is load-bearing: [similarity](Term::is_similar) compares variables
/// positionally.
#[derive(Clone, PartialEq, Debug)]
pub struct Term {
    coefficient: Coefficient,
    variables: Vec<Variable>,
}

impl Term {
    /// Creates a term from a coefficient and a list of variables. Variables sharing an identifier
    /// have their powers combined, as if the term were built up by multiplication.
    pub fn new<C, I>(coefficient: C, variables: I) -> Self
    where
        C: Into<Coefficient>,
        I: IntoIterator<Item = Variable>,
    {
        let mut term = Self {
            coefficient: coefficient.into(),
            variables: Vec::new(),
        };
        for variable in variables {
            term.merge_variable(variable, 1);
        }
        term.normalize();
        term
    }

    /// A term with no variables.
    pub fn constant<C: Into<Coefficient>>(coefficient: C) -> Self {
        Self::new(coefficient, Vec::<Variable>::new())
    }

    /// The multiplicative identity, `1`.
    pub fn one() -> Self {
        Self::constant(Coefficient::one())
    }

    #[inline]
    pub fn coefficient(&self) -> &Coefficient {
        &self.coefficient
    }

    #[inline]
    pub(crate) fn coefficient_mut(&mut self) -> &mut Coefficient {
        &mut self.coefficient
    }

    /// The term's variables, in canonical order.
    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[inline]
    pub(crate) fn variables_mut(&mut self) -> &mut [Variable] {
        &mut self.variables
    }

    /// Finds the variable with the given identifier, if the term has one.
    pub fn variable(&self, identifier: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.identifier() == identifier)
    }

    /// Whether the term has a variable with the given identifier, at any power.
    pub fn contains(&self, identifier: &str) -> bool {
        self.variable(identifier).is_some()
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    /// Whether the term is exactly `1`.
    pub fn is_one(&self) -> bool {
        self.is_constant() && self.coefficient.value() == 1.
    }

    /// Removes every variable whose power is exactly 0.
    pub fn clean(&mut self) {
        self.variables.retain(|v| v.power() != 0);
    }

    /// Sorts the variables into canonical order.
    fn sort_variables(&mut self) {
        self.variables.sort_by(|a, b| match b.power().cmp(&a.power()) {
            Ordering::Equal => a.identifier().cmp(b.identifier()),
            ordering => ordering,
        });
    }

    /// Restores the clean, canonically-ordered variable invariant.
    pub(crate) fn normalize(&mut self) {
        self.clean();
        self.sort_variables();
    }

    /// Folds `variable` into the term, scaling its power by `direction` when an identifier
    /// matches and inserting it as `identifier^(direction * power)` otherwise.
    fn merge_variable(&mut self, variable: Variable, direction: i32) {
        match self
            .variables
            .iter_mut()
            .find(|v| v.same_identifier(&variable))
        {
            Some(mine) => mine.set_power(mine.power() + direction * variable.power()),
            None => {
                let power = direction * variable.power();
                let mut variable = variable;
                variable.set_power(power);
                self.variables.push(variable);
            }
        }
    }

    /// Two terms are similar if they have identical variable signatures, irrespective of their
    /// coefficients. Similar terms can be added directly.
    ///
    /// ```
    /// use libbalance::{Term, Variable};
    ///
    /// let three_x = Term::new(3., vec![Variable::linear("x")]);
    /// let minus_x = Term::new(-1., vec![Variable::linear("x")]);
    /// let x_squared = Term::new(1., vec![Variable::new("x", 2)]);
    /// assert!(three_x.is_similar(&minus_x));
    /// assert!(!three_x.is_similar(&x_squared));
    /// ```
    pub fn is_similar(&self, other: &Term) -> bool {
        self.variables.len() == other.variables.len()
            && self
                .variables
                .iter()
                .zip(other.variables.iter())
                .all(|(a, b)| a.compare(b))
    }

    /// Returns -1, 0, or 1. Variable powers are formal exponents and never affect the sign.
    #[inline]
    pub fn sign(&self) -> i8 {
        self.coefficient.sign()
    }

    /// Adds a similar term to `self`. Fails without modifying `self` if `other` is not similar.
    pub fn add(&mut self, other: &Term) -> AlgebraResult<()> {
        if !self.is_similar(other) {
            return Err(AlgebraError::IncompatibleTerms);
        }
        self.coefficient
            .set_value(self.coefficient.value() + other.coefficient.value());
        Ok(())
    }

    /// Multiplies `self` by `other`, adding the powers of shared variables.
    pub fn multiply(&mut self, other: &Term) {
        self.coefficient
            .set_value(self.coefficient.value() * other.coefficient.value());
        for variable in other.variables.iter() {
            self.merge_variable(variable.clone(), 1);
        }
        self.normalize();
    }

    /// Divides `self` by `other`, subtracting the powers of shared variables. A variable only in
    /// `other` is introduced with a negated power, so `x / y = x * y^-1`.
    ///
    /// Fails without modifying `self` if `other` has a zero coefficient.
    pub fn divide(&mut self, other: &Term) -> AlgebraResult<()> {
        if other.coefficient.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        self.coefficient
            .set_value(self.coefficient.value() / other.coefficient.value());
        for variable in other.variables.iter() {
            self.merge_variable(variable.clone(), -1);
        }
        self.normalize();
        Ok(())
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Self::new(Coefficient::one(), vec![variable])
    }
}
