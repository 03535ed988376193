//! TUI testing utilities using Ratatui's TestBackend

use orgdir::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Check if the buffer contains a string anywhere
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

/// Render the whole app into a fresh terminal and return the screen text
pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw app");
    buffer_to_string(terminal.backend().buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_buffer_contains() {
        let mut terminal = create_test_terminal_sized(20, 5);
        terminal
            .draw(|f| {
                f.render_widget(Paragraph::new("Справочник"), f.area());
            })
            .unwrap();

        assert!(buffer_contains(terminal.backend().buffer(), "Справочник"));
        assert!(!buffer_contains(terminal.backend().buffer(), "missing"));
    }
}
