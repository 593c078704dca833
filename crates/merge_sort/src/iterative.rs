use crate::top_down::{Home, merge_halves};

enum Task {
    Sort { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
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

// Walks the same merge tree as the recursive driver, post-order, with an
// explicit task stack. Both stacks stay logarithmic in the range length.
fn sort_range<T: Ord + Clone>(data: &mut [T], scratch: &mut [T], lo: usize, hi: usize) -> Home {
    let mut tasks: Vec<Task> = Vec::with_capacity(64);
    let mut homes: Vec<Home> = Vec::with_capacity(64);
    tasks.push(Task::Sort { lo, hi });

    while let Some(task) = tasks.pop() {
        match task {
            Task::Sort { lo, hi } => {
                if hi <= lo + 1 {
                    homes.push(Home::Data);
                    continue;
                }
                let mid = lo + ((hi - lo) >> 1);
                tasks.push(Task::Merge { lo, mid, hi });
                tasks.push(Task::Sort { lo: mid, hi });
                tasks.push(Task::Sort { lo, hi: mid });
            }
            Task::Merge { lo, mid, hi } => {
                let (Some(right), Some(left)) = (homes.pop(), homes.pop()) else {
                    unreachable!("both halves are sorted before their merge task runs");
                };
                homes.push(merge_halves(data, scratch, lo, mid, hi, left, right));
            }
        }
    }

    homes.pop().unwrap_or(Home::Data)
}
