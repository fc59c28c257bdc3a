//! # Signature Verification
//!
//! Transaction validation asks exactly one question of the crypto layer:
//! "did this identity sign this message?" [`SignatureVerifier`] is that
//! question as a trait, and [`Ed25519Verifier`] is the production answer.
//!
//! Verification returns `bool`, not `Result`. Undecodable identities and
//! signatures are just another way of being invalid; callers never need to
//! tell them apart, and an attacker gains nothing from us doing so.

use super::keys::{parse_identity, parse_signature};

/// Decides whether `signature` is valid for `message` under `identity`.
///
/// Implementations must be deterministic and side-effect free.
pub trait SignatureVerifier {
    fn verify(&self, identity: &str, message: &[u8], signature: &str) -> bool;
}

impl<V: SignatureVerifier + ?Sized> SignatureVerifier for &V {
    fn verify(&self, identity: &str, message: &[u8], signature: &str) -> bool {
        (**self).verify(identity, message, signature)
    }
}

/// Ed25519 verification over hex-encoded identities and signatures.
///
/// Uses ed25519-dalek's strict verification, which rejects small-order
/// keys and non-canonical signatures that lenient verifiers accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, identity: &str, message: &[u8], signature: &str) -> bool {
        let Ok(key) = parse_identity(identity) else {
            return false;
        };
        let Ok(sig) = parse_signature(signature) else {
            return false;
        };
        key.verify_strict(message, &sig).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::Keypair;

    #[test]
    fn test_sign_and_verify() {
        let kp = Keypair::generate();
        let sig = kp.sign_hex(b"hello, world");
        assert!(Ed25519Verifier.verify(&kp.identity(), b"hello, world", &sig));
    }

    #[test]
    fn test_wrong_message_fails() {
        let kp = Keypair::generate();
        let sig = kp.sign_hex(b"correct message");
        assert!(!Ed25519Verifier.verify(&kp.identity(), b"wrong message", &sig));
    }

    #[test]
    fn test_wrong_key_fails() {
        let kp1 = Keypair::generate();
        let kp2 = Keypair::generate();
        let sig = kp1.sign_hex(b"test message");
        assert!(!Ed25519Verifier.verify(&kp2.identity(), b"test message", &sig));
    }

    #[test]
    fn malformed_inputs_are_false_not_panics() {
        let kp = Keypair::generate();
        let sig = kp.sign_hex(b"msg");
        assert!(!Ed25519Verifier.verify("not hex", b"msg", &sig));
        assert!(!Ed25519Verifier.verify(&kp.identity(), b"msg", "not hex"));
        assert!(!Ed25519Verifier.verify(&kp.identity(), b"msg", &sig[..64]));
        assert!(!Ed25519Verifier.verify("", b"msg", ""));
    }

    #[test]
    fn identity_point_is_rejected() {
        // All zeros decodes to a small-order point.
        let bad_identity = "00".repeat(32);
        let sig = "00".repeat(64);
        assert!(!Ed25519Verifier.verify(&bad_identity, b"doesn't matter", &sig));
    }

    #[test]
    fn test_empty_message() {
        let kp = Keypair::generate();
        let sig = kp.sign_hex(b"");
        assert!(Ed25519Verifier.verify(&kp.identity(), b"", &sig));
    }
}
