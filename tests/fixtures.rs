#![allow(dead_code)]
use std::fmt::Debug;
use std::sync::Once;

use fast_int::{FromCharsResult, FromDecimal, from_chars, from_chars_swar};

static LOGGER_INIT: Once = Once::new();

// Rust runs the tests concurrently, so unless we synchronize logging access
// it will crash when attempting to run `cargo test` with some logging facilities.
pub fn ensure_env_logger_initialized() {
    use std::io::Write;

    LOGGER_INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        builder
            .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
            .init();
    });
}

/// Run both scanners starting from `initial`, assert they agree, and return the shared outcome.
pub fn parse_both<T>(input: &[u8], initial: T) -> (FromCharsResult, T)
where
    T: FromDecimal + PartialEq + Debug,
{
    let (mut scalar_value, mut swar_value) = (initial, initial);
    let scalar = from_chars(input, &mut scalar_value);
    let swar = from_chars_swar(input, &mut swar_value);

    assert_eq!(
        scalar,
        swar,
        "scanners disagree on {:?}",
        String::from_utf8_lossy(input)
    );
    assert_eq!(
        scalar_value,
        swar_value,
        "scanners disagree on value of {:?}",
        String::from_utf8_lossy(input)
    );

    (scalar, scalar_value)
}
