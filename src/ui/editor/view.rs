//! Rendering for the editor screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::story::SlideKind;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_OK,
};

use super::state::{EditorField, EditorState, NoticeLevel};

const CARET: &str = "▏";

pub fn render_editor(frame: &mut Frame, area: Rect, state: &EditorState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(columns[0]);

    render_input(frame, form[0], " Title ", &state.title, state, EditorField::Title);
    render_genre(frame, form[1], state);
    render_input(frame, form[2], " Tags (comma separated) ", &state.tags, state, EditorField::Tags);
    render_composer(frame, form[3], state);
    render_notice(frame, form[4], state);
    render_slide_list(frame, columns[1], state);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let title_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    state: &EditorState,
    field: EditorField,
) {
    let focused = state.focus == field;
    let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT))];
    if focused {
        spans.push(Span::styled(CARET, Style::default().fg(ACCENT)));
    }
    let widget = Paragraph::new(Line::from(spans)).block(field_block(title, focused));
    frame.render_widget(widget, area);
}

fn render_genre(frame: &mut Frame, area: Rect, state: &EditorState) {
    let focused = state.focus == EditorField::Genre;
    let arrows = Style::default().fg(if focused { ACCENT } else { MUTED_TEXT });
    let line = Line::from(vec![
        Span::styled("‹ ", arrows),
        Span::styled(state.genre_name(), Style::default().fg(HEADER_TEXT)),
        Span::styled(" ›", arrows),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(field_block(" Genre ", focused)),
        area,
    );
}

fn render_composer(frame: &mut Frame, area: Rect, state: &EditorState) {
    let focused = state.focus == EditorField::Composer;
    let title = match state.composer_kind {
        SlideKind::Text => " New text slide (Enter: add, Ctrl+T: image) ",
        SlideKind::Image => " New image slide: file path (Enter: add, Ctrl+T: text) ",
    };

    let text = if state.loading_image {
        vec![Line::from(Span::styled(
            format!("Loading {}...", state.composer),
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        let mut lines: Vec<Line> = state
            .composer
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT))))
            .collect();
        if focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled(CARET, Style::default().fg(ACCENT)));
            }
        }
        lines
    };

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(field_block(title, focused));
    frame.render_widget(widget, area);
}

fn render_notice(frame: &mut Frame, area: Rect, state: &EditorState) {
    let Some(notice) = &state.notice else {
        return;
    };
    let color = match notice.level {
        NoticeLevel::Info => STATUS_OK,
        NoticeLevel::Error => STATUS_ERROR,
    };
    let line = Line::from(Span::styled(
        format!(" {}", notice.message),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_slide_list(frame: &mut Frame, area: Rect, state: &EditorState) {
    let focused = state.focus == EditorField::Slides;
    let title = format!(" Slides ({}) ", state.slides.len());
    let block = field_block(&title, focused);

    if state.slides.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No slides yet. Add text or an image on the left.",
            Style::default().fg(MUTED_TEXT),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let summary_width = area.width.saturating_sub(12) as usize;
    let items: Vec<ListItem> = state
        .slides
        .items()
        .iter()
        .map(|slide| {
            let badge = match slide.kind {
                SlideKind::Text => "T",
                SlideKind::Image => "I",
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", slide.order + 1),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(format!("[{badge}] "), Style::default().fg(ACCENT)),
                Span::styled(slide.summary(summary_width), Style::default().fg(HEADER_TEXT)),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(ACTIVE_HIGHLIGHT)
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
