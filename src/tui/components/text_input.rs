//! Single-line input field rendering

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Renders `input` on one line, with an inverse-video cursor when focused
/// and `placeholder` when empty and unfocused.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    input: &Input,
    is_focused: bool,
    placeholder: &str,
    theme: &Theme,
) {
    let value = input.value();
    let value_style = Style::default().fg(theme.text);

    if value.is_empty() && !is_focused {
        let hint = Span::styled(placeholder, Style::default().fg(theme.hint).italic());
        frame.render_widget(Paragraph::new(Line::from(hint)), area);
        return;
    }

    if !is_focused {
        frame.render_widget(Paragraph::new(Span::styled(value, value_style)), area);
        return;
    }

    let cursor_pos = input.visual_cursor();
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    // Keep the cursor visible when the value is wider than the field
    let width = area.width.max(1) as usize;
    let scroll = (cursor_pos + 1).saturating_sub(width);

    let before: String = value.chars().skip(scroll).take(cursor_pos - scroll).collect();
    let at_cursor: String = value
        .chars()
        .nth(cursor_pos)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = value.chars().skip(cursor_pos + 1).collect();

    let spans = vec![
        Span::styled(before, value_style),
        Span::styled(at_cursor, cursor_style),
        Span::styled(after, value_style),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
