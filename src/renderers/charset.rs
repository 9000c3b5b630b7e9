//! Line-drawing glyph sets and junction merging for the text grid.

/// Which glyph family the text renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── BoxChars ────────────────────────────────────────────────────────────────

/// Glyphs for grid lines, card outlines and hour rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// ├ ┤ ┬ ┴ ┼
    pub tee_right: char,
    pub tee_left: char,
    pub tee_down: char,
    pub tee_up: char,
    pub cross: char,
    /// Faint fill for hour lines inside day columns.
    pub hour_rule: char,
}

const UNICODE: BoxChars = BoxChars {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    tee_right: '├',
    tee_left: '┤',
    tee_down: '┬',
    tee_up: '┴',
    cross: '┼',
    hour_rule: '┄',
};

const ASCII: BoxChars = BoxChars {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
    tee_right: '+',
    tee_left: '+',
    tee_down: '+',
    tee_up: '+',
    cross: '+',
    hour_rule: '.',
};

impl BoxChars {
    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => UNICODE,
            CharSet::Ascii => ASCII,
        }
    }

    /// Card outline: rounded corners in Unicode, plain in ASCII.
    pub fn card(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => BoxChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                ..UNICODE
            },
            CharSet::Ascii => ASCII,
        }
    }

    /// Glyph for a junction. Lone arms draw as a straight segment.
    fn junction(&self, arms: Arms) -> char {
        match arms.0 {
            0 => ' ',
            Arms::LEFT | Arms::RIGHT | 0b1100 => self.horizontal,
            Arms::UP | Arms::DOWN | 0b0011 => self.vertical,
            0b1010 => self.top_left,
            0b0110 => self.top_right,
            0b1001 => self.bottom_left,
            0b0101 => self.bottom_right,
            0b1011 => self.tee_right,
            0b0111 => self.tee_left,
            0b1110 => self.tee_down,
            0b1101 => self.tee_up,
            _ => self.cross,
        }
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Directions a grid line leaves a cell in, one bit each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms(u8);

impl Arms {
    const UP: u8 = 0b0001;
    const DOWN: u8 = 0b0010;
    const LEFT: u8 = 0b0100;
    const RIGHT: u8 = 0b1000;

    pub const HORIZONTAL: Arms = Arms(Self::LEFT | Self::RIGHT);
    pub const VERTICAL: Arms = Arms(Self::UP | Self::DOWN);

    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        let mut bits = 0;
        if up {
            bits |= Self::UP;
        }
        if down {
            bits |= Self::DOWN;
        }
        if left {
            bits |= Self::LEFT;
        }
        if right {
            bits |= Self::RIGHT;
        }
        Arms(bits)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Read the arms back out of a grid-line glyph. Card corners, hour rules
    /// and text are not grid lines and give None.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => return Some(Self::HORIZONTAL),
            '|' => return Some(Self::VERTICAL),
            '+' => return Some(Arms(0b1111)),
            _ => {}
        }
        (1..=0b1111u8)
            .map(Arms)
            .filter(|a| a.0.count_ones() >= 2)
            .find(|&a| UNICODE.junction(a) == c)
    }

    pub fn merge(self, other: Self) -> Self {
        Arms(self.0 | other.0)
    }

    pub fn to_char(self, cs: CharSet) -> char {
        BoxChars::for_charset(cs).junction(self)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
