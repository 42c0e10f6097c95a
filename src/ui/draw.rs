//! Demo screen: bordered row list plus a status bar

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::color::Argb;

use super::surface::BufferSurface;

const HELP: &str = "j/k select  b/B brief  d/D body  h/l scrub  s/e icons  q quit";

fn rgb(color: Argb) -> Color {
    Color::Rgb(color.red(), color.green(), color.blue())
}

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App) {
    let appearance = &app.config().appearance;
    let background = rgb(appearance.background);
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(background)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_rows(f, app, chunks[0]);
    draw_status_bar(f, app, chunks[1]);
}

fn draw_rows(f: &mut Frame, app: &mut App, area: Rect) {
    let appearance = app.config().appearance.clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(75, 85, 99)))
        .title(appearance.title.as_str())
        .style(Style::default().bg(rgb(appearance.background)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    app.layout_rows(inner.width);

    let selected = app.selected_index();
    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    for (idx, row) in app.rows().iter().enumerate() {
        let height = row.size().height.max(0) as u16;
        if y >= bottom {
            break;
        }
        let row_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: height.min(bottom - y),
        };
        y = y.saturating_add(height);

        let background = if idx == selected {
            appearance.selection_background
        } else {
            appearance.background
        };
        f.buffer_mut().set_style(row_area, Style::default().bg(rgb(background)));

        let mut surface = BufferSurface::new(f.buffer_mut(), row_area, background);
        row.draw(&mut surface);
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let state = match app.selected_row() {
        Some(row) => {
            let flag = |on: bool| if on { "on" } else { "off" };
            let mut state = format!(
                "row {}/{}  brief {}  body {}",
                app.selected_index() + 1,
                app.rows().len(),
                flag(row.is_brief_text_enabled()),
                flag(row.is_body_text_enabled()),
            );
            if let Some(scrub) = app.scrub().filter(|s| s.row == app.selected_index()) {
                state.push_str(&format!("  scrub {:.0}%", scrub.progress * 100.0));
            }
            state
        }
        None => "no rows configured".to_string(),
    };

    let status = Paragraph::new(format!(" {}  |  {}", state, HELP))
        .style(Style::default().fg(Color::Rgb(156, 163, 175)).bg(rgb(app.config().appearance.background)));
    f.render_widget(status, area);
}
