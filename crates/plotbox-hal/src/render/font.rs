//! Glyph tables: 8×8 text cells and 5×5 compact digits.

pub const GLYPH_SIZE: usize = 8;
pub const COMPACT_SIZE: usize = 5;

const GLYPH_COUNT: usize = 68;
const DIGIT_BASE: usize = 1;
const UPPER_BASE: usize = 11;
const LOWER_BASE: usize = 37;
const COLON_INDEX: usize = 64;
const PERIOD_INDEX: usize = 65;
const MARKER_INDEX: usize = 66;
const MINUS_INDEX: usize = 67;

/// Column-major 8×8 cells: byte `i` is column `i`, bit `j` is row `j`.
///
/// Entries 64..=67 are the punctuation set and are stored row-major instead
/// (byte `i` is row `i`, bit 7 is the leftmost column); they are drawn rotated.
static FONT_8X8: [[u8; GLYPH_SIZE]; GLYPH_COUNT] = [
    [0x00; 8], // blank
    [0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00, 0x00], // 0
    [0x00, 0x00, 0x42, 0x7F, 0x40, 0x00, 0x00, 0x00], // 1
    [0x00, 0x42, 0x61, 0x51, 0x49, 0x46, 0x00, 0x00], // 2
    [0x00, 0x21, 0x41, 0x45, 0x4B, 0x31, 0x00, 0x00], // 3
    [0x00, 0x18, 0x14, 0x12, 0x7F, 0x10, 0x00, 0x00], // 4
    [0x00, 0x27, 0x45, 0x45, 0x45, 0x39, 0x00, 0x00], // 5
    [0x00, 0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00, 0x00], // 6
    [0x00, 0x01, 0x71, 0x09, 0x05, 0x03, 0x00, 0x00], // 7
    [0x00, 0x36, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // 8
    [0x00, 0x06, 0x49, 0x49, 0x29, 0x1E, 0x00, 0x00], // 9
    [0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00, 0x00], // A
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // B
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x22, 0x00, 0x00], // C
    [0x00, 0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00, 0x00], // D
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x00, 0x00], // E
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x01, 0x00, 0x00], // F
    [0x00, 0x3E, 0x41, 0x49, 0x49, 0x7A, 0x00, 0x00], // G
    [0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00, 0x00], // H
    [0x00, 0x00, 0x41, 0x7F, 0x41, 0x00, 0x00, 0x00], // I
    [0x00, 0x20, 0x40, 0x41, 0x3F, 0x01, 0x00, 0x00], // J
    [0x00, 0x7F, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // K
    [0x00, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00], // L
    [0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00, 0x00], // M
    [0x00, 0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00, 0x00], // N
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00, 0x00], // O
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x06, 0x00, 0x00], // P
    [0x00, 0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00, 0x00], // Q
    [0x00, 0x7F, 0x09, 0x19, 0x29, 0x46, 0x00, 0x00], // R
    [0x00, 0x46, 0x49, 0x49, 0x49, 0x31, 0x00, 0x00], // S
    [0x00, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x00, 0x00], // T
    [0x00, 0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00, 0x00], // U
    [0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00, 0x00], // V
    [0x00, 0x7F, 0x20, 0x18, 0x20, 0x7F, 0x00, 0x00], // W
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63, 0x00, 0x00], // X
    [0x00, 0x03, 0x04, 0x78, 0x04, 0x03, 0x00, 0x00], // Y
    [0x00, 0x61, 0x51, 0x49, 0x45, 0x43, 0x00, 0x00], // Z
    [0x00, 0x20, 0x54, 0x54, 0x54, 0x78, 0x00, 0x00], // a
    [0x00, 0x7F, 0x48, 0x44, 0x44, 0x38, 0x00, 0x00], // b
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x20, 0x00, 0x00], // c
    [0x00, 0x38, 0x44, 0x44, 0x48, 0x7F, 0x00, 0x00], // d
    [0x00, 0x38, 0x54, 0x54, 0x54, 0x18, 0x00, 0x00], // e
    [0x00, 0x08, 0x7E, 0x09, 0x01, 0x02, 0x00, 0x00], // f
    [0x00, 0x08, 0x14, 0x54, 0x54, 0x3C, 0x00, 0x00], // g
    [0x00, 0x7F, 0x08, 0x04, 0x04, 0x78, 0x00, 0x00], // h
    [0x00, 0x00, 0x44, 0x7D, 0x40, 0x00, 0x00, 0x00], // i
    [0x00, 0x20, 0x40, 0x44, 0x3D, 0x00, 0x00, 0x00], // j
    [0x00, 0x7F, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00], // k
    [0x00, 0x00, 0x41, 0x7F, 0x40, 0x00, 0x00, 0x00], // l
    [0x00, 0x7C, 0x04, 0x18, 0x04, 0x78, 0x00, 0x00], // m
    [0x00, 0x7C, 0x08, 0x04, 0x04, 0x78, 0x00, 0x00], // n
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00], // o
    [0x00, 0x7C, 0x14, 0x14, 0x14, 0x08, 0x00, 0x00], // p
    [0x00, 0x08, 0x14, 0x14, 0x18, 0x7C, 0x00, 0x00], // q
    [0x00, 0x7C, 0x08, 0x04, 0x04, 0x08, 0x00, 0x00], // r
    [0x00, 0x48, 0x54, 0x54, 0x54, 0x20, 0x00, 0x00], // s
    [0x00, 0x04, 0x3F, 0x44, 0x40, 0x20, 0x00, 0x00], // t
    [0x00, 0x3C, 0x40, 0x40, 0x20, 0x7C, 0x00, 0x00], // u
    [0x00, 0x1C, 0x20, 0x40, 0x20, 0x1C, 0x00, 0x00], // v
    [0x00, 0x3C, 0x40, 0x30, 0x40, 0x3C, 0x00, 0x00], // w
    [0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, 0x00], // x
    [0x00, 0x0C, 0x50, 0x50, 0x50, 0x3C, 0x00, 0x00], // y
    [0x00, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x00, 0x00], // z
    [0x00; 8], // unused
    [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00], // :
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // .
    [0x00, 0x20, 0x10, 0x08, 0x10, 0x20, 0x00, 0x00], // >
    [0x00, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00], // -
];

/// Rows of the compact digits, bit 0 is the leftmost pixel.
///
/// Rows are mirrored before blitting so the most significant of the five bits lands left.
static COMPACT_DIGITS: [[u8; COMPACT_SIZE]; 10] = [
    [0b00110, 0b01001, 0b01001, 0b01001, 0b00110], // 0
    [0b00010, 0b00011, 0b00010, 0b00010, 0b00111], // 1
    [0b00111, 0b01000, 0b00110, 0b00001, 0b01111], // 2
    [0b00111, 0b01000, 0b00110, 0b01000, 0b00111], // 3
    [0b01001, 0b01001, 0b01111, 0b01000, 0b01000], // 4
    [0b01111, 0b00001, 0b00111, 0b01000, 0b00111], // 5
    [0b00110, 0b00001, 0b00111, 0b01001, 0b00110], // 6
    [0b01111, 0b01000, 0b00100, 0b00010, 0b00010], // 7
    [0b00110, 0b01001, 0b00110, 0b01001, 0b00110], // 8
    [0b00110, 0b01001, 0b01110, 0b01000, 0b00110], // 9
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyph {
    pub bytes: [u8; GLYPH_SIZE],
    /// Stored row-major and drawn turned by a quarter.
    pub rotated: bool,
}

/// Table slot for `c`; anything unknown maps to the blank cell at 0.
pub fn glyph_index(c: char) -> usize {
    match c {
        '0'..='9' => DIGIT_BASE + (c as usize - '0' as usize),
        'A'..='Z' => UPPER_BASE + (c as usize - 'A' as usize),
        'a'..='z' => LOWER_BASE + (c as usize - 'a' as usize),
        ':' => COLON_INDEX,
        '.' => PERIOD_INDEX,
        '>' => MARKER_INDEX,
        '-' => MINUS_INDEX,
        _ => 0,
    }
}

pub fn glyph(c: char) -> Glyph {
    let index = glyph_index(c);
    Glyph {
        bytes: FONT_8X8[index],
        rotated: index >= COLON_INDEX,
    }
}

/// Compact rows for a decimal digit, already mirrored for blitting (bit 4 = left).
pub fn compact_digit(c: char) -> Option<[u8; COMPACT_SIZE]> {
    let digit = c.to_digit(10)? as usize;
    Some(COMPACT_DIGITS[digit].map(mirror_row))
}

fn mirror_row(row: u8) -> u8 {
    row.reverse_bits() >> (8 - COMPACT_SIZE)
}
