use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Sticker color, using the standard Western color scheme.
///
/// Colors serialize as their single-character code (`"W"`, `"O"`, ...).
#[derive(
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[repr(u8)]
pub enum Color {
    /// White, the solved color of the Up face.
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    White = 0,
    /// Orange, the solved color of the Left face.
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Orange = 1,
    /// Green, the solved color of the Front face.
    #[serde(rename = "G")]
    #[strum(serialize = "G")]
    Green = 2,
    /// Red, the solved color of the Right face.
    #[serde(rename = "R")]
    #[strum(serialize = "R")]
    Red = 3,
    /// Blue, the solved color of the Back face.
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    Blue = 4,
    /// Yellow, the solved color of the Down face.
    #[serde(rename = "Y")]
    #[strum(serialize = "Y")]
    Yellow = 5,
}

impl Color {
    /// Number of distinct colors.
    pub const COUNT: usize = 6;

    /// Returns the single-character code for the color.
    pub fn char(self) -> char {
        use Color::*;

        match self {
            White => 'W',
            Orange => 'O',
            Green => 'G',
            Red => 'R',
            Blue => 'B',
            Yellow => 'Y',
        }
    }

    /// Returns the color with the given single-character code, or `None` if
    /// `c` is not one of `W`, `O`, `G`, `R`, `B`, `Y`.
    pub fn from_char(c: char) -> Option<Self> {
        use Color::*;

        match c {
            'W' => Some(White),
            'O' => Some(Orange),
            'G' => Some(Green),
            'R' => Some(Red),
            'B' => Some(Blue),
            'Y' => Some(Yellow),
            _ => None,
        }
    }

    /// Returns the human-friendly name of the color.
    pub fn name(self) -> &'static str {
        use Color::*;

        match self {
            White => "White",
            Orange => "Orange",
            Green => "Green",
            Red => "Red",
            Blue => "Blue",
            Yellow => "Yellow",
        }
    }

    /// Returns the index of the color in `0..Color::COUNT`.
    pub fn index(self) -> usize {
        self as usize
    }
}
