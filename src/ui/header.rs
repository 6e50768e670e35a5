use crate::ui::editor::EditorState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, editor: &EditorState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title = if editor.title.trim().is_empty() {
            Span::styled("Untitled story", Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(editor.title.trim().to_string(), text_style)
        };
        let (state_text, state_style) = if let Some(kind) = editor.saving {
            (format!("saving {}…", kind.label()), Style::default().fg(MUTED_TEXT))
        } else if editor.dirty {
            ("modified".to_string(), Style::default().fg(ACCENT))
        } else {
            ("saved".to_string(), Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled(
                "  storyreel",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            title,
            Span::styled("  │  ", separator_style),
            Span::styled(editor.genre_name(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} slides", editor.slides.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(state_text, state_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
