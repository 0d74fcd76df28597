use drillbook_drills::min_remove_to_make_valid;

fn main() {
    for s in ["lee(t(c)o)de)", "a)b(c)d", "))((", "(a(b(c)d)"] {
        println!("{s:>14} -> {}", min_remove_to_make_valid(s));
    }
}
