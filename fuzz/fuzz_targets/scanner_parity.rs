#![no_main]

use core::fmt::Debug;
use core::str::FromStr;

use fast_int::{FromDecimal, from_chars, from_chars_swar};
use libfuzzer_sys::fuzz_target;

fn check<T>(data: &[u8], sentinel: T)
where
    T: FromDecimal + FromStr + PartialEq + Debug,
{
    let (mut scalar_value, mut swar_value) = (sentinel, sentinel);
    let scalar = from_chars(data, &mut scalar_value);
    let swar = from_chars_swar(data, &mut swar_value);

    assert_eq!(scalar, swar);
    assert_eq!(scalar_value, swar_value);

    if !scalar.is_ok() {
        assert_eq!(scalar_value, sentinel);
        return;
    }

    // Anything accepted must agree with the standard library on the consumed prefix.
    let text = core::str::from_utf8(&data[..scalar.consumed]).unwrap();
    match text.parse::<T>() {
        Ok(expected) => assert_eq!(scalar_value, expected),
        Err(_) => panic!("accepted {:?} which std rejects", text),
    }
}

fuzz_target!(|data: &[u8]| {
    check(data, 7i8);
    check(data, 7u8);
    check(data, 7i16);
    check(data, 7u16);
    check(data, 7i32);
    check(data, 7u32);
    check(data, 7i64);
    check(data, 7u64);
    check(data, 7isize);
    check(data, 7usize);

    let (mut scalar_value, mut swar_value) = (false, false);
    assert_eq!(
        from_chars(data, &mut scalar_value),
        from_chars_swar(data, &mut swar_value)
    );
    assert_eq!(scalar_value, swar_value);
});
