use crate::simulation::cell::{Cell, Generation};

/// Lookup table of a 1D elementary automaton.
///
/// Indexed by the 3-bit neighbourhood `4 * left + 2 * center + right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ruleset {
    table: [Cell; 8],
}

impl Ruleset {
    /// `[0, 1, 0, 1, 1, 0, 1, 0]`: every cell becomes `left XOR right`.
    pub const RULE_90: Ruleset = Ruleset::from_bits([0, 1, 0, 1, 1, 0, 1, 0]);

    pub const fn from_bits(bits: [u8; 8]) -> Self {
        let mut table = [Cell::Dead; 8];
        let mut i = 0;
        while i < 8 {
            if bits[i] == 1 {
                table[i] = Cell::Alive;
            }
            i += 1;
        }
        Self { table }
    }

    /// Wolfram code of the table (bit `i` is the outcome of neighbourhood `i`).
    pub fn code(&self) -> u8 {
        self.table
            .iter()
            .enumerate()
            .fold(0, |code, (i, cell)| code | (cell.bit() as u8) << i)
    }

    #[inline(always)]
    pub fn apply(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        self.table[4 * left.bit() + 2 * center.bit() + right.bit()]
    }

    /// Computes the next generation of `row`.
    ///
    /// The first and last cells are copied through unchanged, only the
    /// interior `1..len - 1` is evaluated.
    pub fn next_row(&self, row: &[Cell]) -> Generation {
        let mut next = row.to_vec();
        for (i, window) in row.windows(3).enumerate() {
            next[i + 1] = self.apply(window[0], window[1], window[2]);
        }
        next
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::RULE_90
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::parse_pattern;

    fn row(pattern: &str) -> Generation {
        parse_pattern(pattern).unwrap()
    }

    #[test]
    fn test_rule_90_code() {
        assert_eq!(Ruleset::RULE_90.code(), 90);
    }

    #[test]
    fn test_interior_follows_table() {
        let rules = Ruleset::RULE_90;
        let bits = [0, 1, 0, 1, 1, 0, 1, 0];
        let input = row("0110100111010");
        let next = rules.next_row(&input);

        for i in 1..input.len() - 1 {
            let idx = 4 * input[i - 1].bit() + 2 * input[i].bit() + input[i + 1].bit();
            assert_eq!(next[i].bit(), bits[idx], "cell {i}");
        }
    }

    #[test]
    fn test_boundaries_are_copied() {
        let rules = Ruleset::RULE_90;
        let input = row("1000000001");
        let next = rules.next_row(&input);

        assert_eq!(next.len(), input.len());
        assert_eq!(next[0], Cell::Alive);
        assert_eq!(next[9], Cell::Alive);
        // Neighbours of the live edges flip on.
        assert_eq!(next[1], Cell::Alive);
        assert_eq!(next[8], Cell::Alive);
    }

    #[test]
    fn test_single_cell_spreads() {
        let next = Ruleset::RULE_90.next_row(&row("0000100000"));
        assert_eq!(next, row("0001010000"));

        let after = Ruleset::RULE_90.next_row(&next);
        assert_eq!(after, row("0010001000"));
    }

    #[test]
    fn test_short_rows() {
        let rules = Ruleset::RULE_90;
        assert_eq!(rules.next_row(&row("1")), row("1"));
        assert_eq!(rules.next_row(&row("10")), row("10"));
        assert_eq!(rules.next_row(&row("101")), row("101"));
        assert!(rules.next_row(&[]).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let input = row("0101110010");
        let rules = Ruleset::default();
        assert_eq!(rules.next_row(&input), rules.next_row(&input));
    }
}
