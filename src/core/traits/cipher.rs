use crate::core::errors::Result;

/// Port for the classical cipher variants.
///
/// Implementations live in `core::ciphers` (Caesar, Transposition, Key,
/// Book). Callers pick a concrete variant at the call site; everything
/// downstream of construction only depends on this trait.
pub trait Cipher {
    /// Encode plaintext into ciphertext.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decode ciphertext back into plaintext.
    ///
    /// Not guaranteed to invert `encrypt` for every variant: the book
    /// cipher is lossy by contract, and transposition only round-trips
    /// through its own shaded-cell rule.
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// Human-readable name of this variant (e.g. "Caesar", "XOR").
    fn name(&self) -> &str;
}
