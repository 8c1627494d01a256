//! Legacy request signing with a shared secret.
//!
//! When a client is configured with a shared secret, every request carries a
//! `signature` parameter computed as follows:
//!
//! 1. Ensure a `t` parameter exists (current UTC time, seconds since epoch)
//! 2. Concatenate the raw parameter values in lexicographic key order; list
//!    values contribute each element in order, with no separators
//! 3. Append the secret
//! 4. Take the first 10 hex characters of the MD5 digest of the result
//!
//! The scheme has no separators and no type markers. It is kept bit-for-bit
//! compatible with the server side.
//!
//! # Example
//!
//! ```rust
//! use bitly_api::auth::signature::compute_signature;
//! use bitly_api::clients::Params;
//!
//! let params = Params::new().with("hash", "abc").with("t", "1300000000");
//! let signature = compute_signature(&params, "secret");
//! assert_eq!(signature.len(), 10);
//! assert_eq!(signature, compute_signature(&params, "secret"));
//! ```

use chrono::Utc;
use md5::{Digest, Md5};

use crate::clients::{ParamValue, Params};
use crate::config::SharedSecret;

/// Name of the timestamp parameter.
pub const TIMESTAMP_PARAM: &str = "t";

/// Name of the signature parameter.
pub const SIGNATURE_PARAM: &str = "signature";

/// Number of hex characters kept from the digest.
pub const SIGNATURE_LEN: usize = 10;

/// Computes the legacy signature over `params` and `secret`.
///
/// Returns an empty string when either `params` or `secret` is empty. The
/// function does not add a timestamp; use [`sign`] for the full flow.
#[must_use]
pub fn compute_signature(params: &Params, secret: &str) -> String {
    if params.is_empty() || secret.is_empty() {
        return String::new();
    }

    let mut hasher = Md5::new();
    for (_, value) in params {
        for part in value.wire_values() {
            hasher.update(part.as_bytes());
        }
    }
    hasher.update(secret.as_bytes());

    let mut signature = hex::encode(hasher.finalize());
    signature.truncate(SIGNATURE_LEN);
    signature
}

/// Returns `params` with a `t` parameter set to `now`, unless a non-empty
/// `t` is already present.
#[must_use]
pub fn with_timestamp(params: Params, now: i64) -> Params {
    let has_timestamp = params
        .get(TIMESTAMP_PARAM)
        .is_some_and(|t| !t.is_blank());
    if has_timestamp {
        params
    } else {
        params.with(TIMESTAMP_PARAM, ParamValue::Str(now.to_string()))
    }
}

/// Signs `params` with `secret`, returning the map with `t` and `signature` added.
///
/// An empty parameter map is returned unchanged.
#[must_use]
pub fn sign(params: Params, secret: &SharedSecret) -> Params {
    if params.is_empty() {
        return params;
    }

    let params = with_timestamp(params, Utc::now().timestamp());
    let signature = compute_signature(&params, secret.as_ref());
    params.with(SIGNATURE_PARAM, signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md5_prefix(input: &str) -> String {
        let mut hex = hex::encode(Md5::digest(input.as_bytes()));
        hex.truncate(SIGNATURE_LEN);
        hex
    }

    #[test]
    fn test_signature_is_ten_hex_chars() {
        let params = Params::new().with("hash", "abc").with("t", "1300000000");
        let signature = compute_signature(&params, "secret");

        assert_eq!(signature.len(), 10);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(signature, signature.to_lowercase());
    }

    #[test]
    fn test_signature_is_deterministic_with_fixed_timestamp() {
        let params = Params::new()
            .with("login", "demo")
            .with("hash", vec!["a", "b"])
            .with("t", "1300000000");

        assert_eq!(
            compute_signature(&params, "s3cr3t"),
            compute_signature(&params.clone(), "s3cr3t")
        );
    }

    #[test]
    fn test_signature_concatenates_values_in_key_order() {
        // Sorted keys: apiKey, format, hash, login, t
        let params = Params::new()
            .with("login", "demo")
            .with("apiKey", "R_key")
            .with("format", "json")
            .with("hash", vec!["h1", "h2"])
            .with("t", "1300000000");

        let expected = md5_prefix("R_keyjsonh1h2demo1300000000secret");
        assert_eq!(compute_signature(&params, "secret"), expected);
    }

    #[test]
    fn test_signature_uses_byte_order_for_keys() {
        // Uppercase sorts before lowercase
        let params = Params::new().with("b", "2").with("B", "1").with("a", "3");
        assert_eq!(compute_signature(&params, "x"), md5_prefix("132x"));
    }

    #[test]
    fn test_signature_known_vector() {
        // md5("abc") = 900150983cd24fb0d6963f7d28e17f72
        let params = Params::new().with("k", "a").with("l", "b");
        assert_eq!(compute_signature(&params, "c"), "900150983c");
    }

    #[test]
    fn test_empty_params_or_secret_yield_empty_signature() {
        assert_eq!(compute_signature(&Params::new(), "secret"), "");
        let params = Params::new().with("hash", "abc");
        assert_eq!(compute_signature(&params, ""), "");
    }

    #[test]
    fn test_with_timestamp_keeps_existing_value() {
        let params = with_timestamp(Params::new().with("t", "123"), 999);
        assert_eq!(params.get("t"), Some(&ParamValue::from("123")));
    }

    #[test]
    fn test_with_timestamp_replaces_blank_value() {
        let params = with_timestamp(Params::new().with("t", ""), 999);
        assert_eq!(params.get("t"), Some(&ParamValue::from("999")));
    }

    #[test]
    fn test_sign_adds_timestamp_and_signature() {
        let secret = SharedSecret::new("secret").unwrap();
        let before = Utc::now().timestamp();
        let signed = sign(Params::new().with("hash", "abc"), &secret);

        let Some(ParamValue::Str(t)) = signed.get(TIMESTAMP_PARAM) else {
            panic!("timestamp missing");
        };
        let t: i64 = t.parse().unwrap();
        assert!(t >= before && t <= Utc::now().timestamp());

        let Some(ParamValue::Str(signature)) = signed.get(SIGNATURE_PARAM) else {
            panic!("signature missing");
        };
        let unsigned = Params::new().with("hash", "abc").with("t", t.to_string());
        assert_eq!(signature, &compute_signature(&unsigned, "secret"));
    }

    #[test]
    fn test_sign_leaves_empty_params_alone() {
        let secret = SharedSecret::new("secret").unwrap();
        assert!(sign(Params::new(), &secret).is_empty());
    }
}
