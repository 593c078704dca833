use merge_sort::merge_sort;

fn main() {
    let mut values = vec![3, 2, 4, 0, 1, 6, 5];
    merge_sort(&mut values);
    println!("{values:?}");
}
