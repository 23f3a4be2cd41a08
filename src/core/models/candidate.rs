/// A decoded candidate the oracle accepted.
///
/// `method` is the display label shown to the user: the cipher name for
/// single-key validation, `"<name>（key=<key>）"` for brute-force hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackHit {
    pub method: String,
    pub text: String,
}

/// Maximum number of oracle-accepted results to collect.
///
/// This is the single "no limit" convention in the codebase: the CLI maps
/// `--max-candidates 0` to `Unlimited`, every other value to `AtMost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateCap {
    Unlimited,
    AtMost(usize),
}

impl CandidateCap {
    /// Map the CLI convention (0 = unlimited) onto the cap.
    pub fn from_cli(max_candidates: usize) -> Self {
        match max_candidates {
            0 => Self::Unlimited,
            n => Self::AtMost(n),
        }
    }

    /// Whether `accepted` results already satisfy the cap.
    pub fn reached(&self, accepted: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::AtMost(n) => accepted >= *n,
        }
    }
}
