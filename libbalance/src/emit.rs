//! Emit strategies for terms, fractions, and equations.

use crate::equation::{Equation, Side};
use crate::{Coefficient, Fraction, Term};

use core::fmt;

/// The format in which an equation should be emitted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EmitFormat {
    /// Canonical, human-readable form.
    /// For example, `x + 1 = 5/2`.
    Pretty,
    /// LaTeX output form.
    /// For example, `x + 1 = \frac{5}{2}`.
    Latex,
    /// Internal debug form.
    /// NB: this form is not stable, and no assumptions should be made about it.
    Debug,
}

impl From<&str> for EmitFormat {
    /// Unknown format names fall back to [Pretty](EmitFormat::Pretty).
    fn from(form: &str) -> Self {
        match form {
            "latex" => EmitFormat::Latex,
            "debug" => EmitFormat::Debug,
            _ => EmitFormat::Pretty,
        }
    }
}

impl From<String> for EmitFormat {
    fn from(form: String) -> Self {
        form.as_str().into()
    }
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    // Implementable with `emit_pretty` through the `fmt_emit_impl` macro.
    Self: fmt::Display + fmt::Debug,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat) -> String {
        match form {
            EmitFormat::Pretty => self.emit_pretty(),
            EmitFormat::Latex => self.emit_latex(),
            EmitFormat::Debug => self.emit_debug(),
        }
    }

    /// Emit `self` with the [pretty emit format][EmitFormat::Pretty]
    fn emit_pretty(&self) -> String;

    /// Emit `self` with the [LaTeX emit format][EmitFormat::Latex]
    fn emit_latex(&self) -> String;

    /// Emit `self` with the [debug emit format][EmitFormat::Debug]
    fn emit_debug(&self) -> String {
        format!("{:#?}", self)
    }
}

/// Implements `core::fmt::Display` for a type implementing `Emit`.
#[doc(hidden)]
macro_rules! fmt_emit_impl {
    ($S:path) => {
        impl core::fmt::Display for $S {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.emit_pretty(),)
            }
        }
    };
}

#[derive(Copy, Clone)]
enum Markup {
    Plain,
    Latex,
}

/// Emits a term. An `absolute` term drops the sign of its coefficient, for terms whose sign is
/// emitted separately as a `+` or `-` joiner.
fn emit_term(term: &Term, absolute: bool, markup: Markup) -> String {
    let coefficient = term.coefficient();
    let show_coefficient = term.is_constant() || !coefficient.is_unit();

    let mut result = String::with_capacity(16);
    if !show_coefficient && !absolute && coefficient.sign() < 0 {
        result.push('-');
    }
    if show_coefficient {
        if absolute {
            result.push_str(&Coefficient::new(coefficient.value().abs()).to_string());
        } else {
            result.push_str(&coefficient.to_string());
        }
    }
    for var in term.variables() {
        result.push_str(var.identifier());
        match (var.power(), markup) {
            (1, _) => {}
            (power, Markup::Plain) => result.push_str(&format!("^{}", power)),
            (power, Markup::Latex) => result.push_str(&format!("^{{{}}}", power)),
        }
    }
    result
}

/// Whether a denominator needs parentheses after a `/`. That is the case for more than one
/// juxtaposed factor, like `2x` or `xy`, and for an emitted minus sign, like `-x`.
fn needs_parens(term: &Term, absolute: bool) -> bool {
    let factors = term.variables().len() + if term.coefficient().is_unit() { 0 } else { 1 };
    factors > 1 || (!absolute && term.coefficient().sign() < 0)
}

fn emit_fraction(fraction: &Fraction, absolute: bool, markup: Markup) -> String {
    let numerator = emit_term(fraction.numerator(), absolute, markup);
    if fraction.is_whole() {
        return numerator;
    }
    let denominator = emit_term(fraction.denominator(), absolute, markup);
    match markup {
        Markup::Plain if needs_parens(fraction.denominator(), absolute) => {
            format!("{}/({})", numerator, denominator)
        }
        Markup::Plain => format!("{}/{}", numerator, denominator),
        Markup::Latex => format!("\\frac{{{}}}{{{}}}", numerator, denominator),
    }
}

/// The first fraction of a side keeps its own signs; every later one is joined by the sign of the
/// fraction and emitted as an absolute value.
fn emit_side(side: &Side, markup: Markup) -> String {
    let mut result = String::with_capacity(64);
    for (i, fraction) in side.fractions().iter().enumerate() {
        if i == 0 {
            result.push_str(&emit_fraction(fraction, false, markup));
            continue;
        }
        result.push_str(if fraction.sign() >= 0 { " + " } else { " - " });
        result.push_str(&emit_fraction(fraction, true, markup));
    }
    result
}

fmt_emit_impl!(Term);
impl Emit for Term {
    fn emit_pretty(&self) -> String {
        emit_term(self, false, Markup::Plain)
    }

    fn emit_latex(&self) -> String {
        emit_term(self, false, Markup::Latex)
    }
}

fmt_emit_impl!(Fraction);
impl Emit for Fraction {
    fn emit_pretty(&self) -> String {
        emit_fraction(self, false, Markup::Plain)
    }

    fn emit_latex(&self) -> String {
        emit_fraction(self, false, Markup::Latex)
    }
}

fmt_emit_impl!(Side);
impl Emit for Side {
    fn emit_pretty(&self) -> String {
        emit_side(self, Markup::Plain)
    }

    fn emit_latex(&self) -> String {
        emit_side(self, Markup::Latex)
    }
}

fmt_emit_impl!(Equation);
impl Emit for Equation {
    fn emit_pretty(&self) -> String {
        format!("{} = {}", self.left.emit_pretty(), self.right.emit_pretty())
    }

    fn emit_latex(&self) -> String {
        format!("{} = {}", self.left.emit_latex(), self.right.emit_latex())
    }
}
