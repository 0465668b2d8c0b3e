//! The balance app, a trainer for solving linear equations. For the algebra behind it, see
//! [libbalance's documentation](libbalance).

#![deny(missing_docs)]

mod diagnostics;
use diagnostics::{emit_balance_diagnostics, sanitize_command_for_diagnostics};

use libbalance::diagnostics::Diagnostic;
use libbalance::{
    unlocked_at, Emit, EmitFormat, Equation, Operation, Outcome, Session, SessionConfig,
    SessionError,
};
use clap::value_t;
use tracing::{debug, warn};

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// For wasm, use wee_alloc as a global allocator.
#[cfg(all(feature = "wasm", not(test)))]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Options to run balance with.
#[cfg_attr(feature = "wasm", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Opts {
    /// Commands to run non-interactively, separated by newlines or `;`. When
    /// [None](Option::None), balance reads commands from standard input.
    pub script: Option<String>,
    /// How equations should be emitted.
    pub emit_format: String,
    /// The level to start at.
    pub level: u32,
    /// How many equations must be solved to complete a level.
    pub xp_per_level: u32,
    /// How many random operations scramble a fresh equation.
    pub steps: usize,
    /// Seed for the equation generator.
    pub seed: Option<u64>,
    /// When true, equations are not printed.
    pub quiet: bool,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// A `tracing` filter directive for log output, like `libbalance=debug`.
    pub log: Option<String>,
    /// When true, balance emit will be colored.
    pub color: bool,
}

impl Opts {
    /// The configuration of the session these options describe.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            level: self.level,
            xp_per_level: self.xp_per_level,
            steps: self.steps,
            seed: self.seed,
            ..SessionConfig::default()
        }
    }
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(
            clap::Arg::with_name("script")
                .long("--script")
                .value_name("commands")
                .help(
                    "Commands to run instead of reading from standard input, separated by \
                    newlines or \";\".",
                )
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("-o")
                .long("--output-form")
                .next_line_help(true)
                .help(
                    "Equation emit format. Possible values:\n\
                    \tpretty: Human-readable text, like \"2x + 1 = 7/2\".\n\
                    \tlatex:  LaTeX math mode code, like \"2x + 1 = \\frac{7}{2}\".\n\
                    \tdebug:  Opaque internal representation. Note: this format is not stable.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("pretty")
                .takes_value(true)
                .possible_values(&["pretty", "latex", "debug"]),
        )
        .arg(
            clap::Arg::with_name("level")
                .long("--level")
                .value_name("n")
                .help("The level to start at.")
                .default_value("0")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("xp-per-level")
                .long("--xp-per-level")
                .value_name("n")
                .help("How many equations must be solved to complete a level.")
                .default_value("4")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("steps")
                .long("--steps")
                .value_name("n")
                .help("How many random operations scramble a fresh equation.")
                .default_value("5")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("seed")
                .long("--seed")
                .value_name("n")
                .help("Seed for the equation generator, for reproducible sessions.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("quiet")
                .short("-q")
                .long("--quiet")
                .help("Do not print equations."),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("--explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("log")
                .long("--log")
                .value_name("filter")
                .help("Log filter directives, like \"libbalance=debug\". Overrides RUST_LOG.")
                .takes_value(true),
        );
    let matches = parser(matches)?;

    let seed = if matches.is_present("seed") {
        Some(clap::value_t!(matches, "seed", u64)?)
    } else {
        None
    };
    Ok(Opts {
        script: matches.value_of("script").map(str::to_owned),
        emit_format: matches.value_of("output-form").unwrap_or("pretty").into(),
        level: clap::value_t!(matches, "level", u32)?,
        xp_per_level: clap::value_t!(matches, "xp-per-level", u32)?,
        steps: clap::value_t!(matches, "steps", usize)?,
        seed,
        quiet: matches.is_present("quiet"),
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        log: matches.value_of("log").map(str::to_owned),
        color,
    })
}

/// Output of a balance execution.
#[cfg_attr(feature = "wasm", derive(Serialize, Deserialize))]
#[derive(Default)]
pub struct BalanceResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// Builds a [BalanceResult](self::BalanceResult).
#[derive(Default)]
struct BalanceResultBuilder {
    stdout: String,
    stderr: String,
    page: bool,
    failed: bool,
}

impl BalanceResultBuilder {
    fn respond(&mut self, response: Response) {
        self.stdout.push_str(&response.stdout);
        if !response.stderr.is_empty() {
            if !self.stderr.is_empty() {
                self.stderr.push('\n');
            }
            self.stderr.push_str(&response.stderr);
        }
        self.failed |= response.failed;
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn ok(self) -> BalanceResult {
        BalanceResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn failed(self) -> BalanceResult {
        BalanceResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn finish(self) -> BalanceResult {
        if self.failed {
            self.failed()
        } else {
            self.ok()
        }
    }
}

/// What a [Trainer](self::Trainer) printed in response to a single command.
#[derive(Default, Debug)]
pub struct Response {
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the command produced diagnostics
    pub failed: bool,
    /// Whether the command asked to end the session
    pub quit: bool,
}

impl Response {
    fn println(&mut self, line: impl AsRef<str>) {
        self.stdout.push_str(line.as_ref());
        self.stdout.push('\n');
    }
}

/// A game session driven by text commands.
pub struct Trainer {
    session: Session,
    emit_format: EmitFormat,
    color: bool,
    quiet: bool,
    /// Number of commands seen so far, which diagnostics are numbered with.
    commands: usize,
}

impl Trainer {
    /// Starts a trainer with a fresh session.
    pub fn new(opts: &Opts) -> Result<Self, SessionError> {
        Ok(Self {
            session: Session::new(opts.session_config())?,
            emit_format: opts.emit_format.as_str().into(),
            color: opts.color,
            quiet: opts.quiet,
            commands: 0,
        })
    }

    /// The lines printed before any command is given.
    pub fn greeting(&self) -> String {
        let mut response = Response::default();
        response.println(self.status());
        self.print_equation(&mut response);
        response.stdout
    }

    /// Responds to a command. Commands are either an operation like `+1` or `/ x`, or one of
    /// `help`, `status`, and `quit`.
    pub fn command(&mut self, command: &str) -> Response {
        let mut response = Response::default();
        let trimmed = command.trim();
        if trimmed.is_empty() {
            return response;
        }
        self.commands += 1;
        debug!(line = self.commands, command = trimmed, "command");

        match trimmed {
            "quit" | "q" => response.quit = true,
            "help" => response.println(format!(
                "available operations: {}",
                join(&self.session.unlocked_operations())
            )),
            "status" => response.println(self.status()),
            _ => match command.parse::<Operation>() {
                Ok(operation) => self.apply(command, &operation, &mut response),
                Err(err) => self.err(command, &err.diagnostic(command), &mut response),
            },
        }
        response
    }

    fn apply(&mut self, command: &str, operation: &Operation, response: &mut Response) {
        let outcome = match self.session.apply(operation) {
            Ok(outcome) => outcome,
            Err(err) => return self.err(command, &err.diagnostic(command), response),
        };
        match outcome {
            Outcome::Continue => {}
            Outcome::Solved { solution } => {
                self.print_solution(&solution, response);
                response.println(self.status());
            }
            Outcome::LevelUp { solution, level } => {
                self.print_solution(&solution, response);
                let previous = unlocked_at(level.saturating_sub(1));
                let unlocked: Vec<_> = unlocked_at(level)
                    .into_iter()
                    .filter(|operation| !previous.contains(operation))
                    .collect();
                if unlocked.is_empty() {
                    response.println(format!("level up! you are now at level {}", level));
                } else {
                    response.println(format!(
                        "level up! you are now at level {} and unlocked {}",
                        level,
                        join(&unlocked)
                    ));
                }
                response.println(self.status());
            }
        }
        self.print_equation(response);
    }

    fn err(&self, command: &str, diagnostic: &Diagnostic, response: &mut Response) {
        warn!(
            line = self.commands,
            command = command.trim(),
            code = diagnostic.code.unwrap_or("none"),
            "rejected command"
        );
        response.stderr.push_str(&emit_balance_diagnostics(
            self.commands,
            &sanitize_command_for_diagnostics(command),
            std::slice::from_ref(diagnostic),
            self.color,
        ));
        response.failed = true;
    }

    fn status(&self) -> String {
        let xp_bar = self.session.xp_bar();
        format!(
            "level {}, {}/{} xp",
            self.session.level(),
            xp_bar.xp(),
            xp_bar.xp_per_level()
        )
    }

    fn print_equation(&self, response: &mut Response) {
        if !self.quiet {
            response.println(self.session.equation().emit(self.emit_format));
        }
    }

    fn print_solution(&self, solution: &Equation, response: &mut Response) {
        if !self.quiet {
            response.println(format!("solved: {}", solution.emit(self.emit_format)));
        } else {
            response.println("solved!");
        }
    }
}

fn join(operations: &[Operation]) -> String {
    operations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs balance end-to-end on the script in `opts`.
pub fn run_balance(opts: Opts) -> BalanceResult {
    let mut result = BalanceResultBuilder::default();

    if let Some(diag_code) = opts.explain_diagnostic {
        let codes = Diagnostic::all_codes_with_explanations();
        return match codes.get::<str>(&diag_code) {
            Some(explanation) => {
                result.stdout.push_str(explanation);
                result.page(true);
                result.ok()
            }
            None => {
                result
                    .stderr
                    .push_str(&format!("{} is not a diagnostic code", diag_code));
                result.failed()
            }
        };
    }

    let mut trainer = match Trainer::new(&opts) {
        Ok(trainer) => trainer,
        Err(err) => {
            result.stderr.push_str(&format!("error: {}", err));
            return result.failed();
        }
    };
    result.stdout.push_str(&trainer.greeting());

    let script = opts.script.unwrap_or_default();
    for command in script.split(|c| c == '\n' || c == ';') {
        let response = trainer.command(command);
        let quit = response.quit;
        result.respond(response);
        if quit {
            break;
        }
    }
    result.finish()
}

/// Runs balance through a wasm entry point.
/// `opts` must be a JS object with the same fields as [Opts](self::Opts).
/// Returns a JS object with the same fields as [BalanceResult](self::BalanceResult).
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn run_balance_wasm(opts: JsValue) -> JsValue {
    let opts: Opts = match opts.into_serde() {
        Ok(opts) => opts,
        Err(err) => {
            let result = BalanceResult {
                code: 1,
                stderr: format!("error: {}", err),
                ..BalanceResult::default()
            };
            return JsValue::from_serde(&result).unwrap_or(JsValue::NULL);
        }
    };
    JsValue::from_serde(&run_balance(opts)).unwrap_or(JsValue::NULL)
}
