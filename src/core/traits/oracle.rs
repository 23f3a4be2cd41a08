/// Port for the external text-plausibility oracle.
///
/// The concrete adapter lives in `adapters::oracle`. The crack service
/// only depends on this trait, never on a transport.
pub trait PlausibilityOracle {
    /// Judge whether `text` reads as coherent natural language.
    ///
    /// Transport failures, timeouts and empty responses all read as a
    /// negative verdict; this call never aborts a batch.
    fn is_meaningful(&self, text: &str) -> bool;
}
