//! Keyboard mapping for board input.

use crossterm::event::KeyCode;

/// Maps a digit key 1-9 to its board index 0-8.
pub fn digit_to_position(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
        _ => None,
    }
}

/// Moves the cursor based on arrow keys, staying on the board.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / 3;
    let col = cursor % 3;
    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Up if row > 0 => cursor - 3,
        KeyCode::Down if row < 2 => cursor + 3,
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_indices() {
        assert_eq!(digit_to_position(KeyCode::Char('1')), Some(0));
        assert_eq!(digit_to_position(KeyCode::Char('5')), Some(4));
        assert_eq!(digit_to_position(KeyCode::Char('9')), Some(8));
        assert_eq!(digit_to_position(KeyCode::Char('0')), None);
        assert_eq!(digit_to_position(KeyCode::Enter), None);
    }

    #[test]
    fn cursor_moves_within_rows_and_columns() {
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
    }

    #[test]
    fn cursor_stops_at_edges() {
        assert_eq!(move_cursor(0, KeyCode::Left), 0);
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(2, KeyCode::Right), 2);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
        assert_eq!(move_cursor(6, KeyCode::Left), 6);
    }

    #[test]
    fn unrelated_keys_leave_cursor_alone() {
        assert_eq!(move_cursor(4, KeyCode::Char('x')), 4);
        assert_eq!(move_cursor(4, KeyCode::Esc), 4);
    }
}
