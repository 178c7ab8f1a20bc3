#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use ratatui::buffer::Buffer;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn drag(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
    }

    pub fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Fixed starting point for tests that drive the clock by hand
    pub fn start() -> Instant {
        Instant::now()
    }

    /// Concatenated cell symbols of row `y`
    pub fn buffer_line(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.left()..area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    /// Every row of the buffer, top to bottom
    pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| buffer_line(buf, y))
            .collect()
    }

    pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
        buffer_lines(buf).iter().any(|line| line.contains(needle))
    }
}
