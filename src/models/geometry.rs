//! Keyboard width calculations

use super::core::{Keyboard, Row};

/// Horizontal space taken by a row: each key's width plus its leading shift
pub fn row_extent(row: &Row) -> f64 {
    row.keys.iter().map(|key| key.width + key.shift).sum()
}

/// Width used to size keys on the keyboard
///
/// The explicit override wins when set. Otherwise the widest row decides.
/// A keyboard without rows has width 0.
pub fn effective_width(keyboard: &Keyboard) -> f64 {
    if let Some(width) = keyboard.width {
        return width;
    }
    keyboard.rows.iter().map(row_extent).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::Key;

    fn row_of(widths: &[f64]) -> Row {
        let mut row = Row::new();
        row.keys = widths
            .iter()
            .map(|w| Key { width: *w, ..Key::new() })
            .collect();
        row
    }

    #[test]
    fn test_widest_row_wins() {
        let mut keyboard = Keyboard::new();
        keyboard.rows = vec![row_of(&[1.0; 8]), row_of(&[1.0; 10])];
        assert_eq!(effective_width(&keyboard), 10.0);
    }

    #[test]
    fn test_explicit_width_overrides_rows() {
        let mut keyboard = Keyboard::new();
        keyboard.rows = vec![row_of(&[1.0; 10])];
        keyboard.width = Some(12.0);
        assert_eq!(effective_width(&keyboard), 12.0);
    }

    #[test]
    fn test_shift_is_part_of_extent() {
        let mut row = row_of(&[1.5, 1.0]);
        row.keys[1].shift = 0.5;
        assert_eq!(row_extent(&row), 3.0);
    }

    #[test]
    fn test_no_rows_is_zero() {
        assert_eq!(effective_width(&Keyboard::new()), 0.0);
    }
}
