use crate::{Marble, BOARD_SIZE};

/// A full row or column, oriented so that the push goes toward increasing
/// indices. `None` is an empty cell.
pub(crate) type Line = [Option<Marble>; BOARD_SIZE];

/// Push the line one step toward the far end, starting at `from`.
///
/// If there is an empty cell at or after `from`, the marbles between `from`
/// and that gap slide one step and the gap moves to `from`; nothing leaves
/// the line. Otherwise every marble from `from` onward slides one step, the
/// far-end marble is ejected and returned, and `from` becomes empty.
pub(crate) fn push_toward_end(line: &mut Line, from: usize) -> Option<Marble> {
    match line[from..].iter().position(|cell| cell.is_none()) {
        Some(offset) => {
            let gap = from + offset;
            line[from..=gap].rotate_right(1);
            None
        }
        None => {
            let ejected = line[BOARD_SIZE - 1];
            line[from..].rotate_right(1);
            line[from] = None;
            ejected
        }
    }
}

/// Would this push eject the pusher's own marble off the far end?
///
/// True only when the far-end cell holds `own` and there is no gap between
/// `from` and the far end for the line to compress into.
pub(crate) fn would_eject_own(line: &Line, from: usize, own: Marble) -> bool {
    line[BOARD_SIZE - 1] == Some(own) && line[from..].iter().all(|cell| cell.is_some())
}

/// Is the push blocked by a marble directly behind the origin?
///
/// A marble at the trailing edge of the line has nothing behind it and can
/// always be pushed.
pub(crate) fn blocked_from_behind(line: &Line, from: usize) -> bool {
    from != 0 && line[from - 1].is_some()
}
