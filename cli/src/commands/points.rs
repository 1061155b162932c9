//! The `points` command - store plain structs as raw records.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use erased_array::{Array, ElementType};

use crate::cli::CountArgs;
use crate::common::CliResult;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }
}

fn fmt_point(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    let p: Point = bytemuck::pod_read_unaligned(bytes);
    write!(f, "Point {{x: {:.6}, y: {:.6}, z: {:.6}}}", p.x, p.y, p.z)
}

/// Run the points command.
pub fn run(args: CountArgs) -> CliResult<()> {
    let mut points = Array::new(ElementType::named("Point", size_of::<Point>()))?;
    // Lossless: `count` is at most `MAX_COUNT`.
    for i in 0..args.count {
        points.push_back(bytemuck::bytes_of(&Point::splat(i as f32)))?;
    }
    println!("{}", points.display_with(fmt_point));

    match points.get(4) {
        Some(bytes) => {
            let p: Point = bytemuck::pod_read_unaligned(bytes);
            println!("Point at index 4: {{x: {:.2}, y: {:.2}, z: {:.2}}}", p.x, p.y, p.z);
        }
        None => println!("Point at index 4: none"),
    }

    let index = points.find(bytemuck::bytes_of(&Point::splat(4.0)));
    match index {
        Some(index) => println!("Index of Point {{x: 4.0, y: 4.0, z: 4.0}}: {index}"),
        None => println!("Index of Point {{x: 4.0, y: 4.0, z: 4.0}}: not found"),
    }
    Ok(())
}
