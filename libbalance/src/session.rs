//! A game session: the equation being solved, the player's level, and their progress toward the
//! next one.
//!
//! A session starts each level with `x = c` for a random fraction `c`, then scrambles the equation
//! with random operations the player has unlocked. The player undoes the scramble by applying
//! operations until the equation reads `x = ...` again.

mod errors;
pub(crate) use errors::SessionErrors;

use crate::equation::{Equation, Side};
use crate::errors::AlgebraError;
use crate::operation::{unlocked_at, Operation, UNKNOWN};
use crate::{Fraction, Term, Variable};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Tunables of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// The level the session starts at.
    pub level: u32,
    /// How many equations must be solved to complete a level.
    pub xp_per_level: u32,
    /// How many random operations scramble a fresh equation.
    pub steps: usize,
    /// Seed for the equation generator. Sessions with the same seed and config generate the same
    /// equations; without a seed, sessions are seeded from system entropy.
    pub seed: Option<u64>,
    /// The level from which fresh equations may start with a fractional answer.
    pub denominator_level: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level: 0,
            xp_per_level: 4,
            steps: 5,
            seed: None,
            denominator_level: 3,
        }
    }
}

/// Progress through a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XpBar {
    xp: u32,
    xp_per_level: u32,
}

impl XpBar {
    pub fn new(xp_per_level: u32) -> Self {
        Self {
            xp: 0,
            // A level needs at least one solve to complete.
            xp_per_level: xp_per_level.max(1),
        }
    }

    #[inline]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[inline]
    pub fn xp_per_level(&self) -> u32 {
        self.xp_per_level
    }

    pub fn add_xp(&mut self) {
        self.xp += 1;
    }

    pub fn is_completed(&self) -> bool {
        self.xp >= self.xp_per_level
    }
}

/// An operation the session refused or could not apply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("`{operation}` is not unlocked at level {level}")]
    Locked { operation: Operation, level: u32 },
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// What applying an operation did to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The equation is not solved yet.
    Continue,
    /// The equation was solved as `solution`, and a fresh equation was generated.
    Solved { solution: Equation },
    /// The equation was solved as `solution`, completing the level. The session is now at
    /// `level`, with a fresh equation.
    LevelUp { solution: Equation, level: u32 },
}

pub struct Session {
    equation: Equation,
    level: u32,
    xp_bar: XpBar,
    config: SessionConfig,
    rng: StdRng,
}

impl Session {
    /// Creates a session at the configured level, with a freshly scrambled equation.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Self {
            equation: Equation::new(unknown(), Fraction::zero()),
            level: config.level,
            xp_bar: XpBar::new(config.xp_per_level),
            config,
            rng,
        };
        session.start_level()?;
        Ok(session)
    }

    #[inline]
    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn xp_bar(&self) -> &XpBar {
        &self.xp_bar
    }

    /// The operations the player may apply at the current level.
    pub fn unlocked_operations(&self) -> Vec<Operation> {
        unlocked_at(self.level)
    }

    /// Applies `operation` to the equation.
    ///
    /// Solving the equation earns one xp and replaces the equation with a fresh one. Completing
    /// the xp bar moves the session to the next level.
    ///
    /// Fails without modifying the session on a division by zero, if the operation is not
    /// unlocked at the current level, or if the operation itself fails.
    pub fn apply(&mut self, operation: &Operation) -> SessionResult<Outcome> {
        if operation.divides_by_zero() {
            warn!(%operation, "rejected division by zero");
            return Err(AlgebraError::DivisionByZero.into());
        }
        if !operation.is_unlocked_at(self.level) {
            warn!(%operation, level = self.level, "rejected locked operation");
            return Err(SessionError::Locked {
                operation: operation.clone(),
                level: self.level,
            });
        }
        self.equation.apply(operation)?;
        if !self.equation.is_solved() {
            return Ok(Outcome::Continue);
        }

        let solution = self.equation.clone();
        self.xp_bar.add_xp();
        if self.xp_bar.is_completed() {
            self.level += 1;
            info!(%solution, level = self.level, "level up");
            self.start_level()?;
            return Ok(Outcome::LevelUp {
                solution,
                level: self.level,
            });
        }

        info!(%solution, xp = self.xp_bar.xp(), "solved");
        // The left side is already `x`; only the answer changes.
        self.equation.right = Side::from(self.initial_fraction()?);
        self.scramble()?;
        Ok(Outcome::Solved { solution })
    }

    fn start_level(&mut self) -> SessionResult<()> {
        self.xp_bar = XpBar::new(self.config.xp_per_level);
        self.equation = Equation::new(unknown(), self.initial_fraction()?);
        self.scramble()
    }

    /// A non-zero integer in `[-10, 10]`, over a denominator in `[1, 9]` from the denominator
    /// level on, simplified.
    fn initial_fraction(&mut self) -> SessionResult<Fraction> {
        let mut numerator: i32 = 0;
        while numerator == 0 {
            numerator = self.rng.gen_range(-10..=10);
        }
        let denominator: i32 = if self.level >= self.config.denominator_level {
            self.rng.gen_range(1..=9)
        } else {
            1
        };
        let mut fraction = Fraction::new(
            Term::constant(f64::from(numerator)),
            Term::constant(f64::from(denominator)),
        )?;
        fraction.simplify();
        Ok(fraction)
    }

    /// Applies random unlocked operations until the equation is no longer solved.
    fn scramble(&mut self) -> SessionResult<()> {
        let operations = unlocked_at(self.level);
        // A scramble of zero steps would never leave the solved state.
        let steps = self.config.steps.max(1);
        loop {
            for _ in 0..steps {
                if let Some(operation) = operations.choose(&mut self.rng) {
                    self.equation.apply(operation)?;
                }
            }
            if !self.equation.is_solved() || operations.is_empty() {
                break;
            }
        }
        debug!(equation = %self.equation, "scrambled");
        Ok(())
    }
}

/// The fraction `x`.
fn unknown() -> Fraction {
    Term::from(Variable::linear(UNKNOWN)).into()
}
