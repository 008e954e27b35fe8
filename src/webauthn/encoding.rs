//! Base64url helpers for WebAuthn binary fields.

use crate::error::{Error, Result};
use base64ct::{Base64, Base64UrlUnpadded, Encoding};

/// Encode bytes as unpadded base64url, the form the API expects everywhere.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(bytes)
}

/// Decode a base64url string, tolerating padding and falling back to
/// standard base64 for servers that emit it.
///
/// # Errors
/// Returns an error if the input is not valid base64 in either alphabet.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let unpadded = input.trim_end_matches('=');

    Base64UrlUnpadded::decode_vec(unpadded)
        .or_else(|_| Base64::decode_vec(input))
        .map_err(|err| Error::Encoding(format!("{input:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_bytes() -> crate::Result<()> {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&bytes))?, bytes);
        Ok(())
    }

    #[test]
    fn encodes_without_padding() {
        // One and two padding characters in standard base64.
        assert_eq!(encode(b"ab"), "YWI");
        assert_eq!(encode(b"a"), "YQ");
    }

    #[test]
    fn decodes_padded_input() -> crate::Result<()> {
        assert_eq!(decode("YWI=")?, b"ab");
        assert_eq!(decode("YQ==")?, b"a");
        Ok(())
    }

    #[test]
    fn uses_url_safe_alphabet() -> crate::Result<()> {
        let bytes = vec![0xfb, 0xff, 0xbf];
        let encoded = encode(&bytes);
        assert!(!encoded.contains('+') && !encoded.contains('/'));
        assert_eq!(decode(&encoded)?, bytes);
        Ok(())
    }

    #[test]
    fn accepts_standard_alphabet() -> crate::Result<()> {
        // "+/" variant of the url-safe "-_".
        assert_eq!(decode("+/+/")?, decode("-_-_")?);
        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode("!!!not base64!!!").is_err());
    }
}
