//! Plain-text unfolded net of the cube.
//!
//! ```text
//!       W W W
//!       W W W
//!       W W W
//! O O O G G G R R R B B B
//! O O O G G G R R R B B B
//! O O O G G G R R R B B B
//!       Y Y Y
//!       Y Y Y
//!       Y Y Y
//! ```

use std::fmt;

use itertools::Itertools;

use crate::{Cube, Face};

/// Indentation that lines up the Up and Down faces with Front.
const INDENT: &str = "      ";

/// Faces of the middle strip, left to right.
const STRIP: [Face; 4] = [Face::L, Face::F, Face::R, Face::B];

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", net_lines(self).join("\n"))
    }
}

/// Renders the unfolded net of `cube`: Up above a strip of Left, Front,
/// Right, and Back, with Down below. Lines are separated by `\n` with no
/// trailing newline.
pub fn print_cube(cube: &Cube) -> String {
    cube.to_string()
}

fn net_lines(cube: &Cube) -> Vec<String> {
    let centered = |face: Face| {
        cube[face]
            .rows()
            .map(|row| format!("{INDENT}{}", row.iter().join(" ")))
            .collect_vec()
    };

    let mut lines = centered(Face::U);
    for row in 0..3 {
        lines.push(
            STRIP
                .iter()
                .flat_map(|&face| &cube[face].0[row * 3..row * 3 + 3])
                .join(" "),
        );
    }
    lines.extend(centered(Face::D));
    lines
}
