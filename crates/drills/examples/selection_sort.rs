use drillbook_drills::selection_sort;

fn main() {
    let mut nums = vec![100, 82, 83, 24, 26, 32, 15, 16, 88, 0, -1, -32, 28];
    println!("{nums:?}");
    selection_sort(&mut nums);
    println!("{nums:?}");
}
