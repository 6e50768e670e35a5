use crate::ui::editor::EditorField;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const GLOBAL_HINTS: &str = "Tab: field │ Ctrl+P: preview │ Ctrl+S: draft │ Ctrl+O: publish │ Ctrl+Q: quit";

/// Key hints for the focused field, then the global ones.
fn field_hints(focus: EditorField) -> &'static str {
    match focus {
        EditorField::Title | EditorField::Tags => "type to edit",
        EditorField::Genre => "←/→: genre",
        EditorField::Composer => "Enter: add slide │ Alt+Enter: newline │ Ctrl+T: text/image",
        EditorField::Slides => "↑/↓: select │ K/J: move │ d: remove",
    }
}

pub fn footer_widget(area: Rect, focus: EditorField) -> Paragraph<'static> {
    let hints = format!(" {} │ {}", field_hints(focus), GLOBAL_HINTS);
    let version = format!("v{} ", VERSION);

    // Char counts, not bytes: the separators are multi-byte.
    let content_width = usize::from(area.width.saturating_sub(2));
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    Paragraph::new(Line::from(vec![
        Span::styled(hints, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(version, style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
