//! A guided tour of the containers. Run with:
//!
//! ```sh
//! cargo run --example basic_usage
//! ```

use anyhow::{bail, Result};
use gyre::{ring_vec, BitTrie, LinkedList, Matrix, RingVec};

fn main() -> Result<()> {
    // --- RingVec: a deque with vector storage ------------------------------
    let mut recent = ring_vec!["alpha", "beta"];
    recent.push_back("gamma");
    recent.push_front("omega");
    println!("recent: {recent:?}");

    // Keep a sliding window of the last three entries.
    while recent.len() > 3 {
        recent.pop_front();
    }
    println!("window: {recent:?} (capacity {})", recent.capacity());

    let json = serde_json::to_string(&recent)?;
    println!("as JSON: {json}");
    let restored: RingVec<String> = serde_json::from_str(&json)?;
    if restored.len() != recent.len() {
        bail!("round trip changed the element count");
    }

    // --- LinkedList: reorder by handle -------------------------------------
    let mut tasks: LinkedList<&str> = ["build", "ship"].into_iter().collect();
    let ship = tasks
        .find(&"ship")
        .expect("just inserted");
    tasks.insert_before(ship, "test");
    println!("tasks: {tasks:?}");

    // --- Matrix: fixed dimensions, checked products ------------------------
    let rotate = Matrix::from_rows(2, 2, [0, -1, 1, 0])?;
    let point = Matrix::from_rows(2, 1, [3, 4])?;
    let rotated = rotate.mul_checked(&point)?;
    println!("rotated point: ({}, {})", rotated[(0, 0)], rotated[(1, 0)]);

    // --- BitTrie: prefix routing with set algebra --------------------------
    let mut primary = BitTrie::new();
    primary.insert(&[false], "net-0");
    primary.insert(&[true, false], "net-10");

    let mut fallback = BitTrie::new();
    fallback.insert(&[false], "backup-0");
    fallback.insert(&[true, true], "backup-11");

    primary.union_with(&fallback, |a, _| a);
    println!("routes after union:");
    for (bits, route) in primary.iter() {
        let prefix: String = bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
        println!("  {prefix} -> {route}");
    }

    Ok(())
}
