//! Lists every anchored exponent up to 127 with its perfect number.
//!
//! Run with:
//!   cargo run --example anchor_scan

use dilation_nest_sim::prelude::*;

fn main() -> Result<()> {
    println!("{:>8} {:>10}  {}", "exponent", "strength", "perfect number");
    println!("{:-<72}", "");
    for anchor in scan_anchors(1..=127)? {
        println!(
            "{:>8} {:>10.4}  {}",
            anchor.exponent, anchor.strength, anchor.perfect_number
        );
    }
    Ok(())
}
