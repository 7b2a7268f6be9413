mod quiz;
mod result;
mod status;

use std::time::Instant;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Loading => status::render_loading(frame, area),
        AppState::Error => status::render_error(frame, area, app),
        AppState::Empty => status::render_empty(frame, area),
        AppState::Quiz => quiz::render(frame, area, app, now),
        AppState::Finished => result::render(frame, area, app),
    }
}
