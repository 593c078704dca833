use crate::merge;

// Which of the two equal-length buffers holds the valid sorted data for a
// range. The physical input slice is always `Data`; swapping primary and
// scratch roles is a relabel, never a move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Home {
    Data,
    Scratch,
}

impl Home {
    #[inline]
    pub(crate) fn other(self) -> Home {
        match self {
            Home::Data => Home::Scratch,
            Home::Scratch => Home::Data,
        }
    }
}

pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut scratch = data.to_vec();
    if sort_range(data, &mut scratch, 0, len) == Home::Scratch {
        data.clone_from_slice(&scratch);
    }
}

fn sort_range<T: Ord + Clone>(data: &mut [T], scratch: &mut [T], lo: usize, hi: usize) -> Home {
    if hi <= lo + 1 {
        return Home::Data;
    }

    let mid = lo + ((hi - lo) >> 1);
    let left = sort_range(data, scratch, lo, mid);
    let right = sort_range(data, scratch, mid, hi);
    merge_halves(data, scratch, lo, mid, hi, left, right)
}

// Reconciles the two halves of [lo, hi) into one buffer, merges them into
// the other, and returns where the merged result landed.
pub(crate) fn merge_halves<T: Ord + Clone>(
    data: &mut [T],
    scratch: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    left: Home,
    right: Home,
) -> Home {
    let src = if left == right {
        left
    } else {
        // Copy whichever half still sits in the data slice across, so both
        // halves are readable from scratch.
        if left == Home::Data {
            scratch[lo..mid].clone_from_slice(&data[lo..mid]);
        } else {
            scratch[mid..hi].clone_from_slice(&data[mid..hi]);
        }
        Home::Scratch
    };

    match src {
        Home::Data => merge::merge_into(scratch, lo, &data[lo..mid], &data[mid..hi]),
        Home::Scratch => merge::merge_into(data, lo, &scratch[lo..mid], &scratch[mid..hi]),
    }

    src.other()
}
