//! Rendering for the preview reel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

use crate::nav::SlideNavigator;
use crate::story::SlideKind;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, PROGRESS_FILL, PROGRESS_TRACK};

use super::thumbnail::{HalfBlockImage, ThumbnailCache};

const HINTS: &str = "↑/↓ Space: step │ ←/→: loop │ 1-9: jump │ wheel: scroll │ drag: swipe │ Esc: close";

/// Widest text column, in cells.
const TEXT_WIDTH: u16 = 60;

pub fn render_preview(
    frame: &mut Frame,
    area: Rect,
    navigator: &SlideNavigator,
    thumbnails: &ThumbnailCache,
    now: Instant,
) {
    if area.height < 4 || area.width == 0 {
        return;
    }

    let progress_row = Rect { height: 1, ..area };
    let counter_row = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let hint_row = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    let content = Rect {
        y: area.y + 2,
        height: area.height - 3,
        ..area
    };

    render_progress(frame, progress_row, navigator, now);
    render_counter(frame, counter_row, navigator);
    render_slide(frame, content, navigator, thumbnails);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            HINTS,
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center),
        hint_row,
    );
}

/// How the progress row is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressLayout {
    /// One segment per slide, `width` cells each, one cell gap between.
    Segments { count: u16, width: u16 },
    /// Too many slides for the row: one bar for the whole reel.
    Single,
}

fn progress_layout(slides: usize, row_width: u16) -> Option<ProgressLayout> {
    if slides == 0 || row_width == 0 {
        return None;
    }
    // Each segment needs a cell plus a gap cell.
    let fits = u16::try_from(slides)
        .ok()
        .filter(|count| u32::from(*count) * 2 - 1 <= u32::from(row_width));
    Some(match fits {
        Some(count) => ProgressLayout::Segments {
            count,
            width: ((row_width - (count - 1)) / count).max(1),
        },
        None => ProgressLayout::Single,
    })
}

fn bar_spans(width: u16, fill: f64) -> [Span<'static>; 2] {
    let filled = ((f64::from(width) * fill).round() as u16).min(width);
    [
        Span::styled("━".repeat(usize::from(filled)), Style::default().fg(PROGRESS_FILL)),
        Span::styled(
            "━".repeat(usize::from(width - filled)),
            Style::default().fg(PROGRESS_TRACK),
        ),
    ]
}

/// Stories style progress: past slides full, current filling.
fn render_progress(frame: &mut Frame, area: Rect, navigator: &SlideNavigator, now: Instant) {
    let Some(layout) = progress_layout(navigator.len(), area.width) else {
        return;
    };

    let spans: Vec<Span> = match layout {
        ProgressLayout::Segments { count, width } => {
            let mut spans = Vec::with_capacity(usize::from(count) * 3);
            for index in 0..usize::from(count) {
                spans.extend(bar_spans(width, navigator.segment_fill(index, now)));
                if index + 1 < usize::from(count) {
                    spans.push(Span::raw(" "));
                }
            }
            spans
        }
        ProgressLayout::Single => {
            let current = navigator.current_index().unwrap_or(0) as f64;
            let fill = (current + navigator.progress_ratio(now)) / navigator.len() as f64;
            bar_spans(area.width, fill).into()
        }
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_counter(frame: &mut Frame, area: Rect, navigator: &SlideNavigator) {
    let Some(current) = navigator.current_index() else {
        return;
    };
    let mut text = format!("{} / {} ", current + 1, navigator.len());
    if let Some(target) = navigator.state().target_index() {
        text = format!("→ {}  {}", target + 1, text);
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT))))
            .alignment(Alignment::Right),
        area,
    );
}

fn render_slide(
    frame: &mut Frame,
    area: Rect,
    navigator: &SlideNavigator,
    thumbnails: &ThumbnailCache,
) {
    let Some(slide) = navigator.current_slide() else {
        return;
    };
    let dimmed = navigator.is_transitioning();

    match slide.kind {
        SlideKind::Text => {
            let mut style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
            if dimmed {
                style = style.add_modifier(Modifier::DIM);
            }
            let lines: Vec<Line> = slide
                .content
                .split('\n')
                .map(|line| Line::from(Span::styled(line.to_string(), style)))
                .collect();
            let width = TEXT_WIDTH.min(area.width);
            let wrapped_height = estimate_wrapped_height(&slide.content, width);
            let text_area = centered_rect_by_size(area, width, wrapped_height);
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                text_area,
            );
        }
        SlideKind::Image => match thumbnails.get(slide.id) {
            Some(image) => {
                frame.render_widget(HalfBlockImage::new(image).dimmed(dimmed), area);
            }
            None => {
                let placeholder = centered_rect_by_size(area, 24, 1);
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "[image unavailable]",
                        Style::default().fg(MUTED_TEXT),
                    ))
                    .alignment(Alignment::Center),
                    placeholder,
                );
            }
        },
    }
}

fn estimate_wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    text.split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum::<usize>()
        .min(usize::from(u16::MAX)) as u16
}
