use super::*;

use difference::{Changeset, Difference};
use libtest_mimic::Failed;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

/// Describes a test case for testing the output of a balance script.
pub struct BalanceEmitTest {
    pub args: String,
    pub input: String,
    pub stdout: String,
    pub stderr: String,
    pub exitcode: String,
}

impl BalanceEmitTest {
    /// Creates a balance emit test case from a .balance test file.
    pub fn new(test_name: &str, mut content: String) -> Result<Self, String> {
        let clause_names = ["args", "in", "stdout", "stderr", "exitcode"];
        let mut clauses = Vec::with_capacity(clause_names.len());
        for clause in clause_names.iter() {
            let mut splits: Vec<_> = content
                .split(&format!("{}\n", get_clause_delim(clause)))
                .map(String::from)
                .collect();

            if splits.len() != 3 {
                if clause == &"args" || (*BLESS && can_be_blessed(clause)) {
                    // Args are optional, so we can skip them if not found.
                    // In bless mode, blessable clauses are written later, so leave them empty.
                    clauses.push(String::new());
                    content = splits.pop().unwrap_or_default();
                    continue;
                }

                return Err(Self::missing_clause_failure(test_name, clause));
            }

            content = splits.pop().unwrap_or_default(); // next content is the last split
            let mut clause_content = splits.pop().unwrap_or_default(); // clause content is the second split

            if clause == &"in" {
                // The split input always has a trailing newline that isn't intended for the test.
                // ===in
                // <script>
                //         ^ newline here
                // ===in
                clause_content.pop();
            }
            clauses.push(clause_content);
        }
        let mut clauses = clauses.into_iter();

        Ok(BalanceEmitTest {
            args: clauses.next().unwrap_or_default(),
            input: clauses.next().unwrap_or_default(),
            stdout: clauses.next().unwrap_or_default(),
            stderr: clauses.next().unwrap_or_default(),
            exitcode: clauses.next().unwrap_or_default(),
        })
    }

    /// Executes a balance emit test, ensuring the stdout and stderr of the balance script are as
    /// expected from the test file.
    /// If run in bless mode, the test file is updated with the actual stdout and stderr.
    pub fn drive_test(self, test_name: String, test_path: PathBuf) -> Result<(), Failed> {
        let (stdout, stderr, exitcode) = run_balance_script(&self.args, &self.input)?;

        if *BLESS {
            let blessed = self.make_bless_file(&stdout, &stderr, &exitcode);
            return fs::write(test_path, blessed).map_err(Failed::from);
        }

        // Right ends of bless content may be inaccurate because we always force a newline, so
        // just check that the actual content is correct.
        macro_rules! t {
            ($expr:expr) => {
                $expr.trim_end()
            };
        }

        let mut report = String::new();
        if t!(stdout) != t!(self.stdout) {
            report.push_str("Mismatch in stdout:\n");
            push_diff(&mut report, t!(self.stdout), t!(stdout));
        }
        if t!(stderr) != t!(self.stderr) {
            report.push_str("Mismatch in stderr:\n");
            push_diff(&mut report, t!(self.stderr), t!(stderr));
        }
        if t!(exitcode) != t!(self.exitcode) {
            report.push_str("Mismatch in exit code:\n");
            push_diff(&mut report, t!(self.exitcode), t!(exitcode));
        }
        if report.is_empty() {
            return Ok(());
        }
        let _ = write!(
            report,
            "Hint: If this is expected, try running `{}`.",
            get_bless_cmd(&test_name)
        );
        Err(report.into())
    }

    /// Generates the actual ("bless"ed) contents of a test case.
    fn make_bless_file(&self, stdout: &str, stderr: &str, exitcode: &str) -> String {
        let mut content = String::with_capacity(256);

        let mut push = |clause: &str, clause_content: &str| {
            let clause_delim = get_clause_delim(clause);
            content.push_str(&format!("{}\n", clause_delim));
            content.push_str(clause_content);
            if !clause_content.is_empty() && !clause_content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&format!("{}\n\n", clause_delim));
        };

        if !self.args.is_empty() {
            push("args", &self.args);
        }
        push("in", &self.input);
        push("stdout", stdout);
        push("stderr", stderr);
        push("exitcode", exitcode);
        content.pop(); // drop trailing newline
        content
    }

    /// Describes a clause missing from a test file.
    fn missing_clause_failure(test_name: &str, clause: &str) -> String {
        let clause_delim = get_clause_delim(clause);
        let mut msg = format!(
            "{} clause missing in test case.\n\
            Hint: Add a\n\
            \n\
            \t{}\n\
            \t<text>\n\
            \t{}\n\
            \n\
            section to the test file.",
            clause_delim, clause_delim, clause_delim
        );
        if can_be_blessed(clause) {
            msg.push_str(&format!(
                "\nHint: You can run `{}` to do this for you.",
                get_bless_cmd(test_name)
            ));
        }
        msg
    }
}

/// Returns the delimiter for a test case clause in a .balance test file.
fn get_clause_delim(clause: &str) -> String {
    let prefix = match clause {
        "args" => "!!!",
        "in" => "===",
        _ => "~~~",
    };
    format!("{}{}", prefix, clause)
}

/// Returns whether a clause can be auto-generated with bless mode.
fn can_be_blessed(clause: &str) -> bool {
    matches!(clause, "exitcode" | "stdout" | "stderr")
}

/// Writes a line diff between two texts.
fn push_diff(report: &mut String, text1: &str, text2: &str) {
    let Changeset { diffs, .. } = Changeset::new(text1, text2, "\n");

    for diff in diffs {
        let (content, prefix) = match diff {
            Difference::Same(ref x) => (x.clone(), " "),
            Difference::Add(ref x) => (x.clone(), "+"),
            Difference::Rem(ref x) => (x.clone(), "-"),
        };
        for line in content.lines() {
            report.push_str(prefix);
            report.push_str(line);
            report.push('\n');
        }
    }
}

