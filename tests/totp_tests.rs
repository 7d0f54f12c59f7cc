//! Integration tests for the totpvault code generator.

use totpvault::errors::TotpVaultError;
use totpvault::totp::{generate_code, time_remaining, validate_secret};

// ---------------------------------------------------------------------------
// Known vectors (stable across independent implementations)
// ---------------------------------------------------------------------------

#[test]
fn known_test_vectors() {
    assert_eq!(generate_code("JBSWY3DPEHPK3PXP", 59).unwrap(), "996554");
    assert_eq!(
        generate_code("JBSWY3DPEHPK3PXP", 1_234_567_890).unwrap(),
        "742275"
    );
    assert_eq!(
        generate_code("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ", 59).unwrap(),
        "287082"
    );
}

#[test]
fn secret_normalization_does_not_change_the_code() {
    let reference = generate_code("JBSWY3DPEHPK3PXP", 1_234_567_890).unwrap();
    for variant in [
        "jbswy3dpehpk3pxp",
        "JBSW Y3DP EHPK 3PXP",
        "JBSWY3DPEHPK3PXP====",
    ] {
        assert_eq!(generate_code(variant, 1_234_567_890).unwrap(), reference);
    }
}

// ---------------------------------------------------------------------------
// Invalid secrets
// ---------------------------------------------------------------------------

#[test]
fn invalid_base32_is_an_error_not_a_panic() {
    for bad in ["not-base32!", "189", "💥", ""] {
        assert!(
            matches!(
                generate_code(bad, 0),
                Err(TotpVaultError::InvalidSecret(_))
            ),
            "secret {bad:?} should be rejected"
        );
    }
}

#[test]
fn secrets_under_ten_decoded_bytes_are_rejected() {
    // "JBSWY3DP" decodes to 5 bytes.
    assert!(validate_secret("JBSWY3DP").is_err());
    // 16 Base32 chars decode to exactly 10 bytes — the floor.
    assert!(validate_secret("JBSWY3DPEHPK3PXP").is_ok());
}

// ---------------------------------------------------------------------------
// Window math
// ---------------------------------------------------------------------------

#[test]
fn time_remaining_is_always_between_one_and_thirty() {
    for t in [0u64, 1, 29, 30, 31, 59, 60, 1_234_567_890] {
        let left = time_remaining(t);
        assert!(
            (1..=30).contains(&left),
            "time_remaining({t}) = {left} out of range"
        );
    }
    assert_eq!(time_remaining(30), 30);
    assert_eq!(time_remaining(59), 1);
}
