//! Fuzz target for the Luhn checksum.
//!
//! Luhn functions must never panic, and an appended check digit must
//! always produce a valid number.

#![no_main]

use cardcheck::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = luhn::validate(&digits);

    // The string form must agree with the slice form
    let text: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    assert_eq!(luhn::passes_luhn(&text), luhn::validate(&digits));

    if (1..=30).contains(&digits.len()) {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "adding check digit should make valid");
    }
});
