#![no_main]
use libfuzzer_sys::fuzz_target;

use balance::{run_balance, Opts};

fuzz_target!(|script: String| {
    // Level 5 unlocks every operation, so commands reach the algebra instead of the lock check.
    let opts = Opts {
        script: Some(script),
        emit_format: "pretty".to_owned(),
        level: 5,
        xp_per_level: 4,
        steps: 5,
        seed: Some(0),
        quiet: false,
        explain_diagnostic: None,
        log: None,
        color: false,
    };
    let result = run_balance(opts);
    assert!(result.code == 0 || result.code == 1);
});
