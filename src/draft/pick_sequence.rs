use crate::team::Team;

/// Generate an ordered list of team colors, one entry per pick.
///
/// The side that won first pick takes pick 0, and from there turns are
/// granted in blocks of two, starting with the other side. For blue first
/// and eight picks that is Blue, Red, Red, Blue, Blue, Red, Red, Blue.
///
/// This is used to decide whose turn it is and to validate picking order
/// when captains choose players from the pool. It is deterministic; who
/// gets first pick is decided elsewhere (tiebreak game or coin flip).
/// A `total_picks` that does not land on a block boundary simply truncates
/// the last block.
pub fn generate(total_picks: usize, first_pick: Team) -> Vec<Team> {
    if total_picks == 0 {
        return Vec::new();
    }

    let mut sequence = Vec::with_capacity(total_picks);
    sequence.push(first_pick);

    let mut block = first_pick.other();
    while sequence.len() < total_picks {
        let take = (total_picks - sequence.len()).min(2);
        sequence.extend(std::iter::repeat(block).take(take));
        block = block.other();
    }

    sequence
}
