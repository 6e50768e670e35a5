use crate::ui::app::{App, Screen};
use crate::ui::editor::render_editor;
use crate::ui::footer::footer_widget;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::preview::render_preview;
use ratatui::widgets::Clear;
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();

    if let (Screen::Preview, Some(navigator)) = (app.screen(), app.navigator()) {
        frame.render_widget(Clear, area);
        render_preview(frame, area, navigator, app.thumbnails(), now);
        return;
    }

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Header::new().widget(app.editor()), header);
    frame.render_widget(Clear, body);
    render_editor(frame, body, app.editor());
    frame.render_widget(footer_widget(footer, app.editor().focus), footer);
}
