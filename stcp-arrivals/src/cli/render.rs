//! Text rendering through askama templates.

use askama::Template;

use crate::arrivals::{ArrivalBoard, ArrivalRecord};

/// Arrival board for one stop.
#[derive(Template)]
#[template(path = "board.txt")]
pub struct BoardTemplate<'a> {
    pub stop: &'a str,
    pub fetched_at: String,
    pub records: &'a [ArrivalRecord],
}

/// Contents of one selection list.
#[derive(Template)]
#[template(path = "choices.txt")]
pub struct ChoicesTemplate<'a> {
    pub title: &'a str,
    pub labels: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "help.txt")]
pub struct HelpTemplate;

pub fn board(board: &ArrivalBoard) -> String {
    render(&BoardTemplate {
        stop: &board.stop,
        fetched_at: board.fetched_at.format("%H:%M:%S").to_string(),
        records: &board.records,
    })
}

pub fn choices<'a>(title: &'a str, labels: Vec<&'a str>) -> String {
    render(&ChoicesTemplate { title, labels })
}

pub fn help() -> String {
    render(&HelpTemplate)
}

fn render(template: &impl Template) -> String {
    template
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e))
}
