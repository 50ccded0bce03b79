mod fixtures;

use fixtures::*;

use fast_int::Status;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"0123456789-+ a/:\xff";

fn check_all_types(input: &[u8]) {
    parse_both(input, 0i8);
    parse_both(input, 0u8);
    parse_both(input, 0i16);
    parse_both(input, 0u16);
    parse_both(input, 0i32);
    parse_both(input, 0u32);
    parse_both(input, 0i64);
    parse_both(input, 0u64);
    parse_both(input, 0isize);
    parse_both(input, 0usize);
    parse_both(input, false);
}

fn random_literal(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.random_range(0..=26);
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let byte = if i == 0 && rng.random_bool(0.3) {
            b'-'
        } else if rng.random_bool(0.9) {
            b'0' + rng.random_range(0..10)
        } else {
            ALPHABET[rng.random_range(0..ALPHABET.len())]
        };
        out.push(byte);
    }
    out
}

#[test]
fn test_random_inputs() {
    ensure_env_logger_initialized();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20_000 {
        let input = random_literal(&mut rng);
        check_all_types(&input);
    }
}

#[test]
fn test_random_boundary_lengths() {
    let mut rng = StdRng::seed_from_u64(0xb0b);

    // Lengths around every digit bound, all digits.
    for len in [3, 4, 5, 6, 10, 11, 19, 20, 21] {
        for _ in 0..2_000 {
            let mut input: Vec<u8> = (0..len).map(|_| b'0' + rng.random_range(0..10)).collect();
            check_all_types(&input);
            input.insert(0, b'-');
            check_all_types(&input);
        }
    }
}

#[test]
fn test_exhaustive_short_inputs() {
    let alphabet = b"09-x/:";
    let mut input = Vec::new();

    for len in 0..=5u32 {
        for mut n in 0..alphabet.len().pow(len) {
            input.clear();
            for _ in 0..len {
                input.push(alphabet[n % alphabet.len()]);
                n /= alphabet.len();
            }
            check_all_types(&input);
        }
    }
}

#[test]
fn test_every_byte_in_every_window_lane() {
    for byte in 0..=255u8 {
        for pos in 0..9 {
            let mut input = *b"123456789";
            input[pos] = byte;
            check_all_types(&input);
        }
    }
}

macro_rules! assert_random_round_trips {
    ($rng:ident, $($ty:ty),+ $(,)?) => {
        $(
            for _ in 0..5_000 {
                let x: $ty = $rng.random();
                let text = x.to_string();
                let (result, value) = parse_both(text.as_bytes(), <$ty>::default());
                assert_eq!(result.status, Status::Ok, "{}", text);
                assert_eq!(result.consumed, text.len(), "{}", text);
                assert_eq!(value, x, "{}", text);
            }
        )+
    };
}

#[test]
fn test_random_values_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x0dd5);

    assert_random_round_trips!(rng, i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);
}
