use balance::{get_opts, run_balance, BalanceResult, Opts, Trainer};
use std::env;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::{Command, Stdio};
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};
use tracing_subscriber::EnvFilter;

type MainResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Sends `tracing` events to stderr, filtered by `--log`, then `RUST_LOG`. Logging is off by
/// default so that it does not interleave with the trainer.
fn init_logging(opts: &Opts) {
    let filter = match &opts.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(opts.color)
        .try_init();
}

fn main_impl() -> MainResult<()> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stderr.supports_color();

    let opts = get_opts(|app| app.get_matches_safe(), use_color).unwrap_or_else(|e| e.exit());
    init_logging(&opts);

    if opts.script.is_none() && opts.explain_diagnostic.is_none() {
        return interact(&opts, &mut ch_stdout, &mut ch_stderr);
    }

    let BalanceResult {
        code,
        stdout,
        stderr,
        page,
    } = run_balance(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        print_stdout(&stdout, &mut ch_stdout, page)?;
    }

    std::process::exit(code)
}

/// Runs a trainer on commands read from stdin, until `quit` or the end of input.
fn interact(
    opts: &Opts,
    ch_stdout: &mut BufferedStandardStream,
    ch_stderr: &mut BufferedStandardStream,
) -> MainResult<()> {
    let mut trainer = Trainer::new(opts)?;
    let prompt = atty::is(atty::Stream::Stdin);

    write!(ch_stdout, "{}", trainer.greeting())?;
    writeln!(ch_stdout, "type \"help\" for the available operations")?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            write!(ch_stdout, "> ")?;
        }
        ch_stdout.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let response = trainer.command(&line);
        if !response.stderr.is_empty() {
            write!(ch_stderr, "{}", response.stderr)?;
            ch_stderr.flush()?;
        }
        write!(ch_stdout, "{}", response.stdout)?;
        if response.quit {
            break;
        }
    }
    ch_stdout.flush()?;
    Ok(())
}

/// Basically just copied from rust/src/librustc_driver/lib.rs#show_content_with_pager
fn print_stdout(
    stdout: &str,
    mut ch_stdout: &mut BufferedStandardStream,
    page: bool,
) -> MainResult<()> {
    let mut fallback_to_println = false;

    if page {
        let pager_name = env::var_os("PAGER")
            .unwrap_or_else(|| OsString::from(if cfg!(windows) { "more.com" } else { "less" }));

        match Command::new(pager_name).stdin(Stdio::piped()).spawn() {
            Ok(mut pager) => {
                if let Some(pipe) = pager.stdin.as_mut() {
                    if pipe.write_all(stdout.as_bytes()).is_err() {
                        fallback_to_println = true;
                    }
                }

                if pager.wait().is_err() {
                    fallback_to_println = true;
                }
            }
            Err(_) => {
                fallback_to_println = true;
            }
        }
    }

    // If pager fails for whatever reason, we should still print the content to standard output.
    if fallback_to_println || !page {
        writeln!(&mut ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    Ok(())
}

fn main() {
    let out = std::panic::catch_unwind(main_impl);

    match out {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
        Err(..) => {
            eprint!(
                "\nnote: you found an internal balance error (ISE; it's like an ICE, but for balance)!\n"
            );
            eprint!("\nnote: we would appreciate a bug report\n");
            std::process::exit(2);
        }
    }
}
