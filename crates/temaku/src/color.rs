//! Color names accepted by `%F{name}` and `%K{name}`.
//!
//! There are eight base names. Writing a name with any upper-case letter
//! (`RED`, `Blue`) selects the bright variant of that color.

use phf::phf_map;

/// Number of palette entries shared by all backends.
pub const PALETTE_SIZE: u8 = 16;

/// Offset from a normal color to its bright variant.
pub const BRIGHT_OFFSET: u8 = 8;

/// Base color names mapped to their normal palette index.
pub static COLOR_NAMES: phf::Map<&'static str, u8> = phf_map! {
    "black" => 0,
    "red" => 1,
    "green" => 2,
    "yellow" => 3,
    "blue" => 4,
    "purple" => 5,
    "cyan" => 6,
    "white" => 7,
};

/// What a color group asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    /// A palette index, 0-15.
    Index(u8),
    /// Close the current color.
    Reset,
}

impl ColorSpec {
    /// Look up the contents of a `{...}` color group.
    ///
    /// Returns `None` for unknown names.
    ///
    /// # Examples
    ///
    /// ```
    /// use temaku::color::ColorSpec;
    ///
    /// assert_eq!(ColorSpec::lookup(b"red"), Some(ColorSpec::Index(1)));
    /// assert_eq!(ColorSpec::lookup(b"Red"), Some(ColorSpec::Index(9)));
    /// assert_eq!(ColorSpec::lookup(b"RESET"), Some(ColorSpec::Reset));
    /// assert_eq!(ColorSpec::lookup(b"magenta"), None);
    /// ```
    pub fn lookup(name: &[u8]) -> Option<Self> {
        if name.eq_ignore_ascii_case(b"reset") {
            return Some(ColorSpec::Reset);
        }
        let lower = std::str::from_utf8(name).ok()?.to_ascii_lowercase();
        let index = *COLOR_NAMES.get(lower.as_str())?;
        if lower.as_bytes() == name {
            Some(ColorSpec::Index(index))
        } else {
            Some(ColorSpec::Index(index + BRIGHT_OFFSET))
        }
    }
}

/// Reduce a color index onto the palette.
pub fn palette_slot(index: u8) -> usize {
    (index % PALETTE_SIZE) as usize
}
