use lazy_static::lazy_static;

lazy_static! {
    pub static ref BLESS: bool = std::env::var("BLESS") == Ok("1".into());
}

/// Returns the command to bless a test file.
pub fn get_bless_cmd(test_name: &str) -> String {
    format!(
        "BLESS=1 cargo test -p balance --test system_tests -- \"{}\"",
        test_name
    )
}
