use array_list::ArrayList;
use quick_sort::{QuickSort, SortError};
use tracing_subscriber::EnvFilter;

// RUST_LOG=quick_sort=trace cargo run -p quick_sort --example basic_usage
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Quick Sort Examples ===\n");

    let _ = example_integers();
    let _ = example_strings();
    let _ = example_incomparable();
}

fn example_integers() -> Result<(), SortError> {
    println!("Example 1: Natural order");

    let mut list = ArrayList::from([5, 2, 9, 1, 7]);
    println!("  before: {:?}", list);
    QuickSort::new(&mut list).sort()?;
    println!("  after:  {:?}", list);
    println!();

    Ok(())
}

fn example_strings() -> Result<(), SortError> {
    println!("Example 2: Custom comparator");

    let mut names: ArrayList<String> = ["delta", "a", "charlie", "bo"]
        .into_iter()
        .map(String::from)
        .collect();

    // shortest first
    QuickSort::with_comparator(&mut names, |a: &String, b: &String| a.len().cmp(&b.len()))
        .sort()?;
    println!("  by length: {:?}", names);

    QuickSort::new(&mut names).sort()?;
    println!("  alphabetical: {:?}", names);
    println!();

    Ok(())
}

fn example_incomparable() -> Result<(), SortError> {
    println!("Example 3: Incomparable elements");

    let mut readings = ArrayList::from([0.3, f64::NAN, 0.1]);
    match QuickSort::new(&mut readings).sort() {
        Ok(()) => println!("  sorted: {:?}", readings),
        Err(e) => println!("  natural order failed: {}", e),
    }

    QuickSort::with_comparator(&mut readings, |a: &f64, b: &f64| a.total_cmp(b)).sort()?;
    println!("  with total_cmp: {:?}", readings);

    Ok(())
}
