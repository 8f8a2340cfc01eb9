//! The Prayer Book psalter, divided over thirty days.

use serde::Serialize;

/// One day of the thirty-day psalter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PsalterDay {
    pub day: u8,
    pub morning: &'static [u16],
    pub evening: &'static [u16],
}

/// An inclusive verse range within a psalm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VerseRange {
    pub start: u16,
    pub end: u16,
}

/// Psalm 119 is read in five portions across days 24–26.
pub const PSALM_119_DIVISION: [(&str, VerseRange); 5] = [
    ("24-evening", VerseRange { start: 1, end: 32 }),
    ("25-morning", VerseRange { start: 33, end: 72 }),
    ("25-evening", VerseRange { start: 73, end: 104 }),
    ("26-morning", VerseRange { start: 105, end: 144 }),
    ("26-evening", VerseRange { start: 145, end: 176 }),
];

/// Verses in Psalm 119.
pub const PSALM_119_VERSES: u16 = 176;

macro_rules! day {
    ($day:expr, [$($m:expr),*], [$($e:expr),*]) => {
        PsalterDay { day: $day, morning: &[$($m),*], evening: &[$($e),*] }
    };
}

/// The thirty days, indexed by `day - 1`.
pub const PSALTER: [PsalterDay; 30] = [
    day!(1, [1, 2, 3, 4, 5], [6, 7, 8]),
    day!(2, [9, 10, 11], [12, 13, 14]),
    day!(3, [15, 16, 17], [18]),
    day!(4, [19, 20, 21], [22, 23]),
    day!(5, [24, 25, 26], [27, 28, 29]),
    day!(6, [30, 31], [32, 33, 34]),
    day!(7, [35, 36], [37]),
    day!(8, [38, 39, 40], [41, 42, 43]),
    day!(9, [44, 45, 46], [47, 48, 49]),
    day!(10, [50, 51, 52], [53, 54, 55]),
    day!(11, [56, 57, 58], [59, 60, 61]),
    day!(12, [62, 63, 64], [65, 66, 67]),
    day!(13, [68], [69, 70]),
    day!(14, [71, 72], [73, 74]),
    day!(15, [75, 76, 77], [78]),
    day!(16, [79, 80, 81], [82, 83, 84, 85]),
    day!(17, [86, 87, 88], [89]),
    day!(18, [90, 91, 92], [93, 94]),
    day!(19, [95, 96, 97], [98, 99, 100, 101]),
    day!(20, [102, 103], [104]),
    day!(21, [105], [106]),
    day!(22, [107], [108, 109]),
    day!(23, [110, 111, 112, 113], [114, 115]),
    day!(24, [116, 117, 118], [119]),
    day!(25, [119], [119]),
    day!(26, [119], [119]),
    day!(27, [120, 121, 122, 123, 124, 125], [126, 127, 128, 129, 130, 131]),
    day!(28, [132, 133, 134, 135], [136, 137, 138]),
    day!(29, [139, 140, 141], [142, 143]),
    day!(30, [144, 145, 146], [147, 148, 149, 150]),
];
