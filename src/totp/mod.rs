//! Time-based one-time code generation (RFC 6238).
//!
//! Codes are 6 digits, valid for a 30-second window, computed with
//! HMAC-SHA1 over the big-endian window counter and reduced via the
//! standard dynamic truncation.

use data_encoding::BASE32_NOPAD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::errors::{Result, TotpVaultError};

type HmacSha1 = Hmac<Sha1>;

/// Length of one code window in seconds.
pub const PERIOD: u64 = 30;

/// Number of digits in a generated code.
pub const DIGITS: usize = 6;

/// Minimum decoded secret length in bytes (80 bits, RFC 4226 floor).
const MIN_SECRET_BYTES: usize = 10;

/// Decode a Base32 shared secret into raw key bytes.
///
/// Whitespace is stripped, case is folded, and trailing `=` padding is
/// accepted.  Fails with `InvalidSecret` if the input is not valid
/// Base32 or decodes to fewer than 10 bytes.
pub fn decode_secret(secret: &str) -> Result<Vec<u8>> {
    let normalized: String = secret
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let normalized = normalized.trim_end_matches('=');

    let raw = BASE32_NOPAD
        .decode(normalized.as_bytes())
        .map_err(|_| TotpVaultError::InvalidSecret("not valid Base32 (A-Z, 2-7)".into()))?;

    if raw.len() < MIN_SECRET_BYTES {
        return Err(TotpVaultError::InvalidSecret(format!(
            "secret too short: need at least {MIN_SECRET_BYTES} bytes, got {}",
            raw.len()
        )));
    }

    Ok(raw)
}

/// Validate a Base32 shared secret without keeping the decoded bytes.
pub fn validate_secret(secret: &str) -> Result<()> {
    decode_secret(secret).map(|_| ())
}

/// Generate the 6-digit code for `secret` at `unix_time`.
pub fn generate_code(secret: &str, unix_time: u64) -> Result<String> {
    let key = decode_secret(secret)?;

    // 30-second epoch counter, rendered as an 8-byte big-endian integer.
    let counter = unix_time / PERIOD;
    let mut mac = HmacSha1::new_from_slice(&key)
        .map_err(|e| TotpVaultError::InvalidSecret(format!("HMAC key setup: {e}")))?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation: the low nibble of the final byte selects a
    // 4-byte window; the top bit is masked off before reduction.
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let window = (u32::from(digest[offset] & 0x7f) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]);
    let code = window % 1_000_000;

    Ok(format!("{code:06}"))
}

/// Seconds until the current code expires, always in `[1, 30]`.
pub fn time_remaining(unix_time: u64) -> u64 {
    PERIOD - (unix_time % PERIOD)
}
