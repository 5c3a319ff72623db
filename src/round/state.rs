//! Round state types.

use core::fmt;

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Nothing dealt yet.
    Created,
    /// Five cards each and one card revealed.
    Dealt,
    /// Trump declared and eight cards each.
    TrumpDeclared,
    /// Trick `n` (`0..8`) has been played and resolved.
    InTrick(u8),
    /// Points have been settled.
    Scored,
    /// Won cards thrown away; the round is finished.
    Closed,
    /// Nobody declared trump; nothing was played or scored.
    Abandoned,
    /// A step failed; the round cannot be continued.
    Aborted,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("Created"),
            Self::Dealt => f.write_str("Dealt"),
            Self::TrumpDeclared => f.write_str("TrumpDeclared"),
            Self::InTrick(n) => write!(f, "InTrick({n})"),
            Self::Scored => f.write_str("Scored"),
            Self::Closed => f.write_str("Closed"),
            Self::Abandoned => f.write_str("Abandoned"),
            Self::Aborted => f.write_str("Aborted"),
        }
    }
}
