use array_list::{ArrayList, ArrayListError};

fn main() -> Result<(), ArrayListError> {
    println!("=== Array List Examples ===\n");

    example_positional_edits()?;
    example_cursor_edits()?;
    example_bulk_operations()?;

    Ok(())
}

fn example_positional_edits() -> Result<(), ArrayListError> {
    println!("Example 1: Positional edits");

    let mut list = ArrayList::with_capacity(2);
    list.push("alpha");
    list.push("gamma");
    println!("  {:?} (capacity {})", list, list.capacity());

    list.insert(1, "beta")?;
    println!("  after insert(1, beta): {:?} (capacity {})", list, list.capacity());

    let old = list.set(2, "delta")?;
    println!("  set(2, delta) replaced {}", old);

    let removed = list.remove(0)?;
    println!("  remove(0) -> {}, now {:?}", removed, list);

    match list.get(list.len()) {
        Ok(v) => println!("  unexpected element {}", v),
        Err(e) => println!("  get(len) -> {}", e),
    }
    println!();

    Ok(())
}

fn example_cursor_edits() -> Result<(), ArrayListError> {
    println!("Example 2: Editing while walking");

    let mut list: ArrayList<i32> = (1..=8).collect();
    let mut cursor = list.cursor();
    while let Ok(&v) = cursor.next() {
        if v % 2 == 0 {
            cursor.remove()?;
        } else if v % 3 == 0 {
            cursor.set(v * 10)?;
        }
    }
    println!("  odd numbers, multiples of 3 scaled: {:?}", list);
    println!();

    Ok(())
}

fn example_bulk_operations() -> Result<(), ArrayListError> {
    println!("Example 3: Bulk operations");

    let mut list = ArrayList::from([3, 1, 4, 1, 5, 9, 2, 6]);
    list.remove_all(&[1, 9][..]);
    println!("  without 1 and 9: {:?}", list);

    list.insert_all(0, [0, 0])?;
    println!("  two zeros in front: {:?}", list);

    let middle = list.sub_list(2, 5)?;
    println!("  sub_list(2, 5): {:?}", middle);
    println!("  contains 4? {}  last index of 0: {:?}", list.contains(&4), list.last_index_of(&0));

    Ok(())
}
