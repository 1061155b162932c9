//! The `ints` command - map, filter and reduce over integers.

use erased_array::helpers::{fmt_i32, is_even_i32, square_i32, sum_i32};
use erased_array::Array;

use crate::cli::CountArgs;
use crate::common::CliResult;

/// Run the ints command.
pub fn run(args: CountArgs) -> CliResult<()> {
    let mut values = Array::of::<i32>()?;
    // Lossless: `count` is at most `MAX_COUNT`.
    for i in 0..args.count {
        values.push_back(&(i as i32).to_ne_bytes())?;
    }
    println!("values:  {}", values.display_with(fmt_i32));

    let squares = values.map(square_i32)?;
    println!("squares: {}", squares.display_with(fmt_i32));

    let evens = values.filter(is_even_i32)?;
    println!("evens:   {}", evens.display_with(fmt_i32));

    let mut sum = 0;
    values.reduce(&mut sum, sum_i32);
    println!("sum of values: {sum}");

    let mut sum = 0;
    squares.reduce(&mut sum, sum_i32);
    println!("sum of squares: {sum}");
    Ok(())
}
