/// State of a single cell. Cells carry no identity beyond their position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline(always)]
    pub fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Lenient conversion: only '1' is alive, every other character is dead.
    /// Strict parsing lives in the configuration layer.
    #[inline(always)]
    pub fn from_char(c: char) -> Self {
        Self::from_alive(c == '1')
    }

    #[inline(always)]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// 0 or 1, for neighbourhood arithmetic.
    #[inline(always)]
    pub fn bit(self) -> usize {
        self as usize
    }
}

/// One generation of a 1D automaton.
pub type Generation = Vec<Cell>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_conversion_is_lenient() {
        assert_eq!(Cell::from_char('1'), Cell::Alive);
        assert_eq!(Cell::from_char('0'), Cell::Dead);
        assert_eq!(Cell::from_char('2'), Cell::Dead);
        assert_eq!(Cell::from_char('x'), Cell::Dead);
    }

    #[test]
    fn test_bit() {
        assert_eq!(Cell::Alive.bit(), 1);
        assert_eq!(Cell::Dead.bit(), 0);
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
