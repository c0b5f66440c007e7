//! End-to-end tests for the cardcheck pipeline.
//!
//! These tests cover published test card numbers, the exact stage ordering,
//! formatting edge cases and the status-code mapping.

use cardcheck::{
    batch::{self, BatchSummary},
    classify,
    generate::{generate_deterministic, generate_deterministic_with_prefix},
    is_valid, luhn,
    normalize::normalize,
    passes_luhn,
    response::{respond, status_code},
    validate, CardNetwork, FailureKind, MalformedReason, SupportedProvider, ValidationError,
    MAX_CARD_DIGITS, MIN_CARD_DIGITS,
};

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// These are official test card numbers from payment processors.
// They pass Luhn validation but are not real cards.

mod test_cards {
    // Visa test cards
    pub const VISA_1: &str = "4111111111111111";
    pub const VISA_2: &str = "4012888888881881";
    pub const VISA_3: &str = "4222222222222"; // 13 digits
    pub const VISA_4: &str = "4000056655665556";
    pub const VISA_5: &str = "4242424242424242";
    pub const VISA_6: &str = "4532015112830366";

    // Mastercard test cards
    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";
    pub const MC_3: &str = "5200828282828210";
    // 2-series range
    pub const MC_2SERIES_1: &str = "2223000048400011";
    pub const MC_2SERIES_2: &str = "2223520043560014";

    // American Express test cards
    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";
    pub const AMEX_3: &str = "340000000000009";
    pub const AMEX_CORPORATE: &str = "378734493671000";

    // Discover test cards
    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6011000990139424";
    pub const DISCOVER_3: &str = "6445644564456445";

    // Diners Club test cards
    pub const DINERS_1: &str = "30569309025904";
    pub const DINERS_2: &str = "38520000023237";
    pub const DINERS_3: &str = "36700102000000";

    // JCB test cards
    pub const JCB_1: &str = "3530111333300000";
    pub const JCB_2: &str = "3566002020360505";
}

// =============================================================================
// ACCEPTED CARDS
// =============================================================================

#[test]
fn test_all_visa_test_cards() {
    for card in [
        test_cards::VISA_1,
        test_cards::VISA_2,
        test_cards::VISA_3,
        test_cards::VISA_4,
        test_cards::VISA_5,
        test_cards::VISA_6,
    ] {
        let result = validate(card);
        assert!(
            result.is_ok(),
            "Visa card {} should be valid: {:?}",
            card,
            result
        );
        assert_eq!(result.unwrap().provider(), SupportedProvider::Visa);
    }
}

#[test]
fn test_all_mastercard_test_cards() {
    for card in [
        test_cards::MC_1,
        test_cards::MC_2,
        test_cards::MC_3,
        test_cards::MC_2SERIES_1,
        test_cards::MC_2SERIES_2,
    ] {
        let result = validate(card);
        assert!(
            result.is_ok(),
            "Mastercard {} should be valid: {:?}",
            card,
            result
        );
        assert_eq!(result.unwrap().provider(), SupportedProvider::MasterCard);
    }
}

#[test]
fn test_all_amex_test_cards() {
    for card in [
        test_cards::AMEX_1,
        test_cards::AMEX_2,
        test_cards::AMEX_3,
        test_cards::AMEX_CORPORATE,
    ] {
        let validated = validate(card).unwrap();
        assert_eq!(validated.provider(), SupportedProvider::AmericanExpress);
        assert_eq!(validated.network(), CardNetwork::AmericanExpress);
        assert_eq!(validated.length(), 15);
    }
}

#[test]
fn test_visa_lengths() {
    for length in [13, 16, 19] {
        let card = generate_deterministic_with_prefix("4", length).unwrap();
        let validated = validate(card.as_str()).unwrap();
        assert_eq!(validated.length(), length);
    }

    // Right prefix, wrong length for Visa, and nothing else claims it
    let card = generate_deterministic_with_prefix("4", 15).unwrap();
    assert_eq!(
        validate(card.as_str()).unwrap_err(),
        ValidationError::UnsupportedCardType
    );
}

// =============================================================================
// RECOGNISED BUT UNSUPPORTED NETWORKS
// =============================================================================

#[test]
fn test_unsupported_networks_are_rejected_with_406() {
    let cases = [
        (test_cards::DISCOVER_1, CardNetwork::Discover),
        (test_cards::DISCOVER_2, CardNetwork::Discover),
        (test_cards::DISCOVER_3, CardNetwork::Discover),
        (test_cards::DINERS_1, CardNetwork::DinersClub),
        (test_cards::DINERS_2, CardNetwork::DinersClub),
        (test_cards::DINERS_3, CardNetwork::DinersClub),
        (test_cards::JCB_1, CardNetwork::Jcb),
        (test_cards::JCB_2, CardNetwork::Jcb),
    ];

    for (card, network) in cases {
        assert_eq!(classify(card), Some(network), "{}", card);

        let result = validate(card);
        assert_eq!(
            result,
            Err(ValidationError::UnsupportedProvider { network }),
            "{}",
            card
        );
        assert_eq!(status_code(&result), 406);
    }
}

#[test]
fn test_maestro_is_unsupported() {
    let card = generate_deterministic(CardNetwork::Maestro);
    assert_eq!(classify(&card), Some(CardNetwork::Maestro));
    assert_eq!(
        validate(card.as_str()).unwrap_err().kind(),
        FailureKind::UnsupportedProvider
    );
}

#[test]
fn test_unclassified_card_is_406() {
    let card = "1234567890123452";
    assert!(passes_luhn(card));
    assert_eq!(classify(card), None);

    let result = validate(card);
    assert_eq!(result, Err(ValidationError::UnsupportedCardType));
    assert_eq!(status_code(&result), 406);
}

// =============================================================================
// INPUT FORMAT TESTS
// =============================================================================

#[test]
fn test_spaces_are_accepted() {
    assert!(validate("4111 1111 1111 1111").is_ok());
    assert!(validate("4111  1111  1111  1111").is_ok());
    assert!(validate(" 4111111111111111 ").is_ok());
    assert!(validate("3782 822463 10005").is_ok());
}

#[test]
fn test_hyphens_pass_length_but_fail_checksum() {
    for card in [
        "4111-1111-1111-1111",
        "4111--1111--1111--1111",
        "4111-1111 1111 1111",
        "4532-0151-1283-0366",
    ] {
        assert!(cardcheck::check_length(card).is_ok(), "{}", card);
        assert!(!passes_luhn(card), "{}", card);
        assert_eq!(
            validate(card).unwrap_err(),
            ValidationError::InvalidChecksum,
            "{}",
            card
        );
    }
}

#[test]
fn test_other_separators_are_malformed() {
    for card in ["4111.1111.1111.1111", "4111_1111_1111_1111", "4111\t1111\t1111\t1111"] {
        assert_eq!(
            validate(card).unwrap_err(),
            ValidationError::Malformed(MalformedReason::NonNumeric),
            "{:?}",
            card
        );
    }
}

#[test]
fn test_non_ascii_digits_are_malformed() {
    // Fullwidth and Arabic-Indic digits are not ASCII digits
    let fullwidth = "４１１１１１１１１１１１１１１１";
    let arabic = "٤١١١١١١١١١١١١١١١";
    for card in [fullwidth, arabic] {
        assert_eq!(normalize(card).char_count(), 16);
        assert_eq!(
            validate(card).unwrap_err(),
            ValidationError::Malformed(MalformedReason::NonNumeric)
        );
    }
}

#[test]
fn test_null_and_blank_input() {
    let empty = ValidationError::Malformed(MalformedReason::Empty);
    for card in [None, Some(""), Some(" "), Some("-"), Some(" - - ")] {
        let result = validate(card);
        assert_eq!(result, Err(empty.clone()), "{:?}", card);
        assert_eq!(status_code(&result), 400);
    }
}

// =============================================================================
// LENGTH BOUNDARY TESTS
// =============================================================================

#[test]
fn test_minimum_length_boundary() {
    let twelve = "411111111111";
    assert_eq!(
        validate(twelve).unwrap_err(),
        ValidationError::TooShort {
            minimum: MIN_CARD_DIGITS,
            length: 12
        }
    );

    // 13 digits clears the length stage
    assert_ne!(
        validate("4111111111111").unwrap_err().kind(),
        FailureKind::TooShort
    );
}

#[test]
fn test_maximum_length_boundary() {
    let nineteen = generate_deterministic_with_prefix("4", 19).unwrap();
    assert!(validate(nineteen.as_str()).is_ok());

    let twenty = "41111111111111111111";
    let result = validate(twenty);
    assert_eq!(
        result,
        Err(ValidationError::TooLong {
            maximum: MAX_CARD_DIGITS,
            length: 20
        })
    );
    assert_eq!(status_code(&result), 414);
}

#[test]
fn test_length_counts_after_normalization() {
    // 12 digits padded with spaces and hyphens is still too short
    assert_eq!(
        validate("4111 1111-1111 ---").unwrap_err(),
        ValidationError::TooShort {
            minimum: 13,
            length: 12
        }
    );
}

#[test]
fn test_length_stage_precedes_composition() {
    // Short garbage is reported by length, long garbage too
    assert_eq!(validate("hello").unwrap_err().kind(), FailureKind::TooShort);
    assert_eq!(
        validate("this is definitely not a card number")
            .unwrap_err()
            .kind(),
        FailureKind::TooLong
    );
}

// =============================================================================
// LUHN ALGORITHM TESTS
// =============================================================================

#[test]
fn test_luhn_single_digit_change() {
    let valid = "4532015112830366";
    assert!(passes_luhn(valid));

    for i in 0..valid.len() {
        let mut bytes = valid.as_bytes().to_vec();
        bytes[i] = if bytes[i] == b'9' { b'0' } else { bytes[i] + 1 };
        let changed = String::from_utf8(bytes).unwrap();
        assert!(!passes_luhn(&changed), "change at {} not detected", i);
    }
}

#[test]
fn test_luhn_check_digit_generation() {
    let partial = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6];
    let check = luhn::generate_check_digit(&partial);
    assert_eq!(check, 6);

    let mut full = partial.to_vec();
    full.push(check);
    assert!(luhn::validate(&full));
}

#[test]
fn test_luhn_edge_inputs() {
    assert!(passes_luhn(""));
    assert!(passes_luhn("0"));
    assert!(passes_luhn("0000 0000"));
    assert!(!passes_luhn("1"));
    assert!(!passes_luhn("abc"));
    assert!(!passes_luhn("4111111111111111\n"));
}

// =============================================================================
// STATUS MAPPING TESTS
// =============================================================================

#[test]
fn test_status_mapping_table() {
    let cases = [
        ("4532 0151 1283 0366", 200),
        ("", 400),
        ("4111111111111X11", 400),
        ("123456789", 400),
        ("4532015112830367", 400),
        ("4532-0151-1283-0366", 400),
        ("12345678901234567890123", 414),
        ("1234567890123452", 406),
        ("30569309025904", 406),
    ];

    for (card, expected) in cases {
        let (status, _) = respond(&validate(card));
        assert_eq!(status, expected, "{:?}", card);
    }
}

#[test]
fn test_length_failure_payloads() {
    let (_, body) = respond(&validate("123456789"));
    assert_eq!(body.min_length, Some(13));
    assert_eq!(body.actual_length, Some(9));

    let (_, body) = respond(&validate("12345678901234567890123"));
    assert_eq!(body.max_length, Some(19));
    assert_eq!(body.actual_length, Some(23));
}

#[cfg(feature = "serde")]
#[test]
fn test_success_payload_json() {
    let (status, body) = respond(&validate(test_cards::AMEX_1));
    assert_eq!(status, 200);
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({
            "message": "Card validation successful",
            "cardType": "AmericanExpress"
        })
    );
}

// =============================================================================
// ERROR MESSAGE TESTS
// =============================================================================

#[test]
fn test_error_messages_are_helpful() {
    let cases = [
        ("", "cannot be empty"),
        ("4111111111111X11", "non-numeric characters detected"),
        ("123456789", "at least 13 digits; received 9"),
        ("12345678901234567890123", "cannot exceed 19 digits; received 23"),
        ("4532015112830367", "invalid checksum"),
        ("1234567890123452", "unsupported card type"),
        ("6011111111111117", "card type 'Discover' is not supported"),
    ];

    for (card, fragment) in cases {
        let message = validate(card).unwrap_err().to_string();
        assert!(
            message.contains(fragment),
            "{:?}: {:?} should contain {:?}",
            card,
            message,
            fragment
        );
    }
}

#[test]
fn test_errors_never_echo_the_card_number() {
    for card in [
        test_cards::DINERS_1,
        "4532015112830367",
        "12345678901234567890123",
    ] {
        let message = validate(card).unwrap_err().to_string();
        assert!(!message.contains(card), "{}", message);
    }
}

// =============================================================================
// PROVIDER PARSING TESTS
// =============================================================================

#[test]
fn test_provider_labels() {
    assert_eq!(
        "american express".parse::<SupportedProvider>(),
        Ok(SupportedProvider::AmericanExpress)
    );
    assert_eq!(
        "MASTERCARD".parse::<SupportedProvider>(),
        Ok(SupportedProvider::MasterCard)
    );
    assert!("Discover".parse::<SupportedProvider>().is_err());
    assert!("42".parse::<SupportedProvider>().is_err());
    assert!("   ".parse::<SupportedProvider>().is_err());
}

#[test]
fn test_every_network_label_restricts_consistently() {
    for network in CardNetwork::ALL {
        let restricted = SupportedProvider::try_from(network);
        let expected = matches!(
            network,
            CardNetwork::Visa | CardNetwork::MasterCard | CardNetwork::AmericanExpress
        );
        assert_eq!(restricted.is_ok(), expected, "{}", network);
    }
}

// =============================================================================
// BATCH PROCESSING TESTS
// =============================================================================

#[test]
fn test_batch_preserves_order() {
    let cards = [
        test_cards::VISA_1,
        "invalid",
        test_cards::MC_1,
        test_cards::DINERS_1,
        test_cards::AMEX_1,
    ];

    let results = batch::validate_batch(&cards);
    let singles: Vec<_> = cards.iter().map(|c| validate(*c)).collect();
    assert_eq!(results, singles);
}

#[test]
fn test_batch_partitioned_indices() {
    let cards = ["invalid", test_cards::VISA_1, "4111111111111112", test_cards::AMEX_1];
    let (valid, invalid) = batch::validate_partitioned(&cards);

    assert_eq!(valid.len(), 2);
    let indices: Vec<usize> = invalid.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_batch_summary() {
    let cards = [
        test_cards::VISA_1,
        test_cards::MC_1,
        test_cards::JCB_1,
        "4111111111111112",
        "",
    ];
    let summary = BatchSummary::from_results(&batch::validate_batch(&cards));
    assert_eq!(summary.total, 5);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.unsupported_provider, 1);
    assert_eq!(summary.checksum_failed, 1);
    assert_eq!(summary.malformed, 1);
    assert_eq!(batch::count_valid(&cards), (2, 3));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_batch_matches_sequential() {
    let cards: Vec<String> = (0..500)
        .map(|i| match i % 4 {
            0 => test_cards::VISA_1.to_string(),
            1 => test_cards::DINERS_1.to_string(),
            2 => format!("{:016}", i),
            _ => test_cards::AMEX_2.to_string(),
        })
        .collect();

    assert_eq!(
        batch::validate_batch_parallel(&cards),
        batch::validate_batch(&cards)
    );
}

// =============================================================================
// CONVENIENCE API TESTS
// =============================================================================

#[test]
fn test_is_valid_matches_validate() {
    for card in [
        test_cards::VISA_1,
        test_cards::DINERS_1,
        "4111-1111-1111-1111",
        "",
        "abc",
    ] {
        assert_eq!(is_valid(card), validate(card).is_ok(), "{}", card);
    }
}

#[test]
fn test_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<cardcheck::ValidatedCard>();
    assert_send_sync::<ValidationError>();
    assert_send_sync::<CardNetwork>();
    assert_send_sync::<SupportedProvider>();
}
