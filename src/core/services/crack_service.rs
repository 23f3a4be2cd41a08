use crate::core::errors::Result;
use crate::core::models::candidate::{CandidateCap, CrackHit};
use crate::core::traits::cipher::Cipher;
use crate::core::traits::oracle::PlausibilityOracle;

/// Orchestrates candidate validation by filtering decoded texts through
/// a `PlausibilityOracle`.
///
/// Candidates are submitted strictly one at a time, in generation order;
/// a finite cap stops enumeration as soon as enough are accepted.
pub struct CrackService<O: PlausibilityOracle> {
    oracle: O,
}

impl<O: PlausibilityOracle> CrackService<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Filter brute-force candidates through the oracle.
    ///
    /// Accepted results are tagged `"<method>（key=<key>）"`. Empty
    /// candidates are rejected without consulting the oracle. Returns as
    /// soon as the cap is reached; `CandidateCap::Unlimited` walks the
    /// whole list.
    pub fn search(
        &self,
        method: &str,
        candidates: &[(usize, String)],
        cap: CandidateCap,
    ) -> Vec<CrackHit> {
        let mut hits = Vec::new();

        for (key, text) in candidates {
            if text.is_empty() {
                continue;
            }
            if self.oracle.is_meaningful(text) {
                hits.push(CrackHit {
                    method: format!("{method}（key={key}）"),
                    text: text.clone(),
                });
                if cap.reached(hits.len()) {
                    break;
                }
            }
        }

        hits
    }

    /// Decode once with a fixed-key cipher and consult the oracle once.
    ///
    /// The hit, if any, is tagged with the cipher's display name.
    pub fn validate_single<C: Cipher>(&self, cipher: &C, ciphertext: &str) -> Result<Vec<CrackHit>> {
        let decrypted = cipher.decrypt(ciphertext)?;
        if decrypted.is_empty() {
            return Ok(Vec::new());
        }
        if self.oracle.is_meaningful(&decrypted) {
            return Ok(vec![CrackHit {
                method: cipher.name().to_string(),
                text: decrypted,
            }]);
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::ciphers::book::BookCipher;
    use crate::core::ciphers::key::KeyCipher;

    /// Oracle affirming texts from a fixed list, recording every call.
    struct ScriptedOracle {
        meaningful: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedOracle {
        fn accepting(texts: &[&str]) -> Self {
            Self {
                meaningful: texts.iter().map(|t| t.to_string()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl PlausibilityOracle for ScriptedOracle {
        fn is_meaningful(&self, text: &str) -> bool {
            self.calls.borrow_mut().push(text.to_string());
            self.meaningful.iter().any(|t| t == text)
        }
    }

    fn candidates() -> Vec<(usize, String)> {
        vec![
            (0, "ずたけぬ".to_string()),
            (3, "こんにちは".to_string()),
            (7, "わろてふ".to_string()),
            (12, "さようなら".to_string()),
        ]
    }

    #[test]
    fn unlimited_cap_collects_every_accepted_candidate() {
        let oracle = ScriptedOracle::accepting(&["こんにちは", "さようなら"]);
        let service = CrackService::new(oracle);

        let hits = service.search("Caesar", &candidates(), CandidateCap::Unlimited);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].method, "Caesar（key=3）");
        assert_eq!(hits[0].text, "こんにちは");
        assert_eq!(hits[1].method, "Caesar（key=12）");
        assert_eq!(service.oracle.call_count(), 4);
    }

    #[test]
    fn finite_cap_stops_after_first_acceptance() {
        let oracle = ScriptedOracle::accepting(&["こんにちは", "さようなら"]);
        let service = CrackService::new(oracle);

        let hits = service.search("Caesar", &candidates(), CandidateCap::AtMost(1));

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].method, "Caesar（key=3）");
        // No oracle calls past the accepting one
        assert_eq!(service.oracle.call_count(), 2);
    }

    #[test]
    fn empty_candidates_never_reach_the_oracle() {
        let oracle = ScriptedOracle::accepting(&[]);
        let service = CrackService::new(oracle);
        let candidates = vec![(0, String::new()), (1, String::new())];

        let hits = service.search("Transposition", &candidates, CandidateCap::Unlimited);

        assert!(hits.is_empty());
        assert_eq!(service.oracle.call_count(), 0);
    }

    #[test]
    fn rejecting_oracle_yields_no_hits() {
        let oracle = ScriptedOracle::accepting(&[]);
        let service = CrackService::new(oracle);

        let hits = service.search("Caesar", &candidates(), CandidateCap::Unlimited);

        assert!(hits.is_empty());
        assert_eq!(service.oracle.call_count(), 4);
    }

    #[test]
    fn single_key_hit_uses_display_name() {
        let cipher = KeyCipher::new("key").unwrap();
        let plaintext = "こんにちは";
        let ciphertext = cipher.encrypt(plaintext).unwrap();

        let oracle = ScriptedOracle::accepting(&[plaintext]);
        let service = CrackService::new(oracle);

        let hits = service.validate_single(&cipher, &ciphertext).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].method, "XOR");
        assert_eq!(hits[0].text, plaintext);
    }

    #[test]
    fn single_key_rejection_yields_no_hits() {
        let cipher = KeyCipher::new("key").unwrap();
        let oracle = ScriptedOracle::accepting(&[]);
        let service = CrackService::new(oracle);

        let hits = service
            .validate_single(&cipher, &cipher.encrypt("text").unwrap())
            .unwrap();

        assert!(hits.is_empty());
        assert_eq!(service.oracle.call_count(), 1);
    }

    #[test]
    fn single_key_empty_decode_skips_the_oracle() {
        // A fully unparseable book ciphertext decodes to the empty string
        let cipher = BookCipher::new("吾輩は猫である");
        let oracle = ScriptedOracle::accepting(&[]);
        let service = CrackService::new(oracle);

        let hits = service.validate_single(&cipher, "??-??").unwrap();

        assert!(hits.is_empty());
        assert_eq!(service.oracle.call_count(), 0);
    }
}
