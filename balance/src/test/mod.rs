use libtest_mimic::{Arguments, Failed, Trial};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

mod balance_emit_test;
mod common;

use balance_emit_test::BalanceEmitTest;
use common::*;
use exec::*;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();
    let tests = collect_test_files()?
        .into_iter()
        .map(|(name, path)| TestCase::new(name, path).into_trial())
        .collect();
    libtest_mimic::run(&args, tests).exit();
}

/// Collects all `.balance` system test files, starting from balance/src/test and visiting all
/// nested directories.
fn collect_test_files() -> Result<Vec<(String, PathBuf)>, Box<dyn Error>> {
    let root_test_path = Path::new("src/test");
    let mut dirs_to_visit = vec![root_test_path.to_path_buf()];
    let mut tests = Vec::with_capacity(32);
    while let Some(dir) = dirs_to_visit.pop() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let entry_type = entry.file_type()?;
            if entry_type.is_dir() {
                dirs_to_visit.push(path);
                continue;
            }
            if path.extension() == Some(OsStr::new("balance")) {
                let name = path.strip_prefix(root_test_path)?.display().to_string();
                tests.push((name, path));
            }
        }
    }
    tests.sort();
    Ok(tests)
}

struct TestCase {
    name: String,
    path: PathBuf,
    variant: TestCaseVariant,
}

enum TestCaseVariant {
    BalanceEmit(BalanceEmitTest),
    FailedTestConstruction(String),
}

impl TestCase {
    /// Creates a test case from a balance system test file.
    fn new(name: String, path: PathBuf) -> Self {
        let variant = match fs::read_to_string(&path) {
            Ok(content) => match BalanceEmitTest::new(&name, content) {
                Ok(test) => TestCaseVariant::BalanceEmit(test),
                Err(msg) => TestCaseVariant::FailedTestConstruction(msg),
            },
            Err(e) => TestCaseVariant::FailedTestConstruction(e.to_string()),
        };
        Self {
            name,
            path,
            variant,
        }
    }

    fn into_trial(self) -> Trial {
        let Self {
            name,
            path,
            variant,
        } = self;
        let test_name = name.clone();
        Trial::test(name, move || match variant {
            TestCaseVariant::BalanceEmit(tc) => tc.drive_test(test_name, path),
            TestCaseVariant::FailedTestConstruction(msg) => Err(Failed::from(msg)),
        })
        .with_kind("system")
    }
}
