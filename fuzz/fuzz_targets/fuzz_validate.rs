//! Fuzz target for the validation pipeline.
//!
//! Arbitrary input must never panic, and the stages must agree with the
//! final outcome.

#![no_main]

use cardcheck::response::status_code;
use cardcheck::{check_length, classify, normalize, passes_luhn, validate, SupportedProvider};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = validate(data);
    let _ = normalize(data);

    assert!(matches!(status_code(&result), 200 | 400 | 406 | 414));

    if let Ok(card) = result {
        assert!(check_length(data).is_ok());
        assert!(passes_luhn(data));
        assert_eq!(classify(data), Some(card.network()));
        assert_eq!(SupportedProvider::try_from(card.network()), Ok(card.provider()));
    }

    let _ = data.parse::<SupportedProvider>();
});
