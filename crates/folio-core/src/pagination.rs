//! Cyclic index stepping for section pagination
//!
//! Both ends wrap: stepping forward from the final section lands on the
//! first, stepping backward from the first lands on the final.

use crate::error::{FolioError, FolioResult};

/// Step `current` by a unit `direction` within `[0, count)`, wrapping
///
/// `count` must be at least 1 and `current` must already be in range;
/// `direction` must be exactly -1 or +1.
pub fn paginate_index(current: usize, direction: i8, count: usize) -> FolioResult<usize> {
    if direction != -1 && direction != 1 {
        return Err(FolioError::InvalidDirection(direction));
    }
    if count == 0 {
        return Err(FolioError::NoSections);
    }
    if current >= count {
        return Err(FolioError::IndexOutOfRange {
            index: current,
            count,
        });
    }

    let stepped = current as isize + direction as isize + count as isize;
    Ok(stepped as usize % count)
}
