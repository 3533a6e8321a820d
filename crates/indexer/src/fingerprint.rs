use sha2::{Digest, Sha256};

/// Short content fingerprint: the first 16 hex characters of the SHA-256
/// digest of the document's bytes.
///
/// Equality of fingerprints is the sole change-detection criterion; where a
/// file sits in the traversal never matters.
#[must_use]
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut hex = String::with_capacity(16);
    for byte in digest.iter().take(8) {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::fingerprint;
    use pretty_assertions::assert_eq;

    #[test]
    fn fingerprint_is_16_hex_chars() {
        let fp = fingerprint(b"some document body");
        assert_eq!(fp.len(), 16);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn equal_bytes_equal_fingerprints() {
        assert_eq!(fingerprint(b"same"), fingerprint(b"same"));
    }

    #[test]
    fn different_bytes_different_fingerprints() {
        assert_ne!(fingerprint(b"one"), fingerprint(b"two"));
    }

    #[test]
    fn empty_input_is_fingerprintable() {
        assert_eq!(fingerprint(b"").len(), 16);
    }
}
