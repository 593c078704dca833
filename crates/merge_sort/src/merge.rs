use std::slice;

// One-element look-ahead over a sorted run. `head` is the next unconsumed
// element; `None` means the run is exhausted.
struct Cursor<'a, T> {
    head: Option<&'a T>,
    rest: slice::Iter<'a, T>,
}

impl<'a, T> Cursor<'a, T> {
    fn new(run: &'a [T]) -> Self {
        let mut rest = run.iter();
        let head = rest.next();
        Cursor { head, rest }
    }

    #[inline]
    fn advance(&mut self) {
        self.head = self.rest.next();
    }
}

fn fill<T: Clone>(dst: &mut [T], mut at: usize, mut run: Cursor<'_, T>) {
    while let Some(e) = run.head {
        dst[at] = e.clone();
        at += 1;
        run.advance();
    }
}

// Interleaves two sorted runs into `dst` starting at `at`. Ties take the
// right-hand element first; equal keys therefore come out in reverse of
// their input order.
pub(crate) fn merge_into<T: Ord + Clone>(dst: &mut [T], mut at: usize, left: &[T], right: &[T]) {
    let mut a = Cursor::new(left);
    let mut b = Cursor::new(right);

    loop {
        match (a.head, b.head) {
            (None, _) => return fill(dst, at, b),
            (_, None) => return fill(dst, at, a),
            (Some(x), Some(y)) => {
                if x < y {
                    dst[at] = x.clone();
                    a.advance();
                } else {
                    dst[at] = y.clone();
                    b.advance();
                }
            }
        }
        at += 1;
    }
}
