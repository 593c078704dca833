mod iterative;
mod merge;
mod top_down;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Driver {
    Recursive,
    ExplicitStack,
}

pub const ALL_DRIVERS: [Driver; 2] = [Driver::Recursive, Driver::ExplicitStack];

pub fn all_drivers() -> &'static [Driver] {
    &ALL_DRIVERS
}

pub fn driver_name(driver: Driver) -> &'static str {
    match driver {
        Driver::Recursive => "recursive",
        Driver::ExplicitStack => "explicit_stack",
    }
}

/// Sorts the slice in place with the recursive driver. The scratch buffer is
/// allocated internally and dropped before returning; the caller's slice
/// always ends up holding the sorted data.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    top_down::sort(data);
}

/// Same contract as [`merge_sort`], with an explicit driver choice. Both
/// drivers walk the same merge tree and produce identical output, including
/// the order of equal keys.
pub fn merge_sort_with<T: Ord + Clone>(driver: Driver, data: &mut [T]) {
    match driver {
        Driver::Recursive => top_down::sort(data),
        Driver::ExplicitStack => iterative::sort(data),
    }
}
