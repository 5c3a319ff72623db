//! Contract scoring.

use crate::team::Team;

/// Minimum the declaring team needs to make its contract.
pub const CONTRACT_THRESHOLD: u32 = 82;
/// Most the defending team may take and still keep its own points.
pub const DEFENSE_CEILING: u32 = 80;
/// Bonus for winning the eighth trick.
pub const LAST_TRICK_BONUS: u32 = 10;
/// Card points in a deck plus the last-trick bonus.
pub const ROUND_TOTAL: u32 = 162;

/// Card points plus the last-trick bonus, before the contract rule.
#[must_use]
pub fn raw_points(team: &Team) -> u32 {
    let bonus = if team.won_last_trick() { LAST_TRICK_BONUS } else { 0 };
    team.won_cards().total_points() + bonus
}

/// Applies the contract rule to a raw tally.
///
/// The declarer keeps its tally from 82 up and scores nothing below. The
/// defense keeps its tally up to 80; above that the declarer has failed and
/// the defense takes the full 162.
///
/// # Example
///
/// ```
/// use belote::score::settle;
///
/// assert_eq!(settle(90, true), 90);
/// assert_eq!(settle(72, false), 72);
/// assert_eq!(settle(60, true), 0);
/// assert_eq!(settle(102, false), 162);
/// ```
#[must_use]
pub const fn settle(raw: u32, declarer: bool) -> u32 {
    if declarer {
        if raw >= CONTRACT_THRESHOLD { raw } else { 0 }
    } else if raw <= DEFENSE_CEILING {
        raw
    } else {
        ROUND_TOTAL
    }
}

/// Final round points for `team`.
#[must_use]
pub fn team_round_points(team: &Team) -> u32 {
    settle(raw_points(team), team.is_declarer())
}
