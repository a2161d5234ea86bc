use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Stylize,
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, List, Padding, Paragraph, Wrap},
};

use super::{
    Model, controller,
    pager::Pager,
    session::{Browse, Mode, NOT_FOUND_MESSAGE},
};
use crate::{
    api::{
        catalog::CatalogApiT,
        common_types::{CardDetail, CardSummary},
    },
    screen::{
        common::{self, BackgroundWidget, card_codes},
        resources::Resources,
    },
};

const INPUT_PROMPT: &str = "> ";

pub(super) fn render<A: CatalogApiT>(model: &Model<A>, frame: &mut Frame<'_>, resources: &Resources) {
    let area = frame.area();
    let mode = model.session.mode();

    frame.render_widget(BackgroundWidget::new(resources.background_color), area);

    let [title_area, body_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = match mode {
        Mode::Search { .. } => "Card lookup (ygocdb.com)",
        Mode::Results(_) => "Search results",
        Mode::Detail { .. } => "Card details",
    };
    frame.render_widget(
        Line::from(format!(" {title} "))
            .bold()
            .fg(resources.main_color)
            .bg(resources.accent_color)
            .centered(),
        title_area,
    );

    match mode {
        Mode::Search { input } => render_search(input, frame, body_area, resources),
        Mode::Results(browse) => render_results(browse, model.session.query(), frame, body_area, resources),
        Mode::Detail { card, .. } => {
            render_detail(card, model.detail_scroll, frame, body_area, resources)
        }
    }

    let status = if let Some(error) = model.session.pending_error() {
        Line::from(format!("Error: {error}")).fg(resources.error_color)
    } else if model.session.is_busy() {
        Line::from(model.loading_label).fg(resources.main_color)
    } else {
        Line::default()
    };
    frame.render_widget(status, status_area);

    frame.render_widget(
        Line::from(help_line(mode)).fg(resources.secondary_color),
        help_area,
    );

    if model.show_navigation_help {
        common::render_navigation_help(controller::mapping_for(mode), frame, resources);
    }
}

fn body_block<'a>(title: String, resources: &Resources) -> Block<'a> {
    Block::new()
        .border_type(BorderType::Rounded)
        .borders(Borders::all())
        .border_style(resources.accent_color)
        .padding(Padding::horizontal(1))
        .title(title)
        .title_alignment(Alignment::Center)
}

fn render_search(input: &str, frame: &mut Frame<'_>, area: Rect, resources: &Resources) {
    let block = body_block("Search".to_string(), resources);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let line = Line::from(format!("{INPUT_PROMPT}{input}")).fg(resources.main_color);
    let cursor_x = input_area.x.saturating_add(line.width() as u16);
    frame.render_widget(line, input_area);
    frame.set_cursor_position(Position::new(
        cursor_x.min(input_area.right().saturating_sub(1)),
        input_area.y,
    ));

    frame.render_widget(
        Line::from("Type a card name or a card id").fg(resources.secondary_color),
        hint_area,
    );
}

fn render_results(
    browse: &Browse,
    query: &str,
    frame: &mut Frame<'_>,
    area: Rect,
    resources: &Resources,
) {
    let block = body_block(format!("Results for \"{query}\""), resources);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, pagination_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let pager = browse.pager();
    let window = pager.current_window();

    if window.is_empty() {
        common::render_centered_text(
            frame,
            list_area,
            Text::from(NOT_FOUND_MESSAGE).fg(resources.secondary_color),
        );
        return;
    }

    let list = List::new(window.iter().enumerate().map(|(idx, card)| {
        let item = Text::raw(card_label(card));

        if Some(idx) == browse.selected() {
            item.bold()
                .bg(resources.accent_color)
                .fg(resources.main_color)
        } else {
            item.fg(resources.main_color)
        }
    }));

    frame.render_widget(list, list_area);
    frame.render_widget(
        Line::from(pagination_line(pager)).fg(resources.secondary_color),
        pagination_area,
    );
}

fn render_detail(
    card: &CardDetail,
    scroll: u16,
    frame: &mut Frame<'_>,
    area: Rect,
    resources: &Resources,
) {
    let lines = card_detail_lines(card);
    let visible_rows = area.height.saturating_sub(2) as usize;

    let mut block = body_block(card.name.clone(), resources);
    if scroll > 0 || lines.len() > visible_rows {
        block = block.title_bottom(
            Line::from(format!(" line {}/{} ↑↓ ", scroll as usize + 1, lines.len()))
                .right_aligned(),
        );
    }

    let paragraph = Paragraph::new(lines.join("\n"))
        .fg(resources.main_color)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}

pub(super) fn card_label(card: &CardSummary) -> String {
    format!("{} ({})", card.display_name, card.id)
}

pub(super) fn pagination_line(pager: &Pager) -> String {
    let page = pager.current_page();
    let window = pager.current_window();

    let mut parts = vec![];

    if page > 0 {
        parts.push("← previous".to_string());
    }

    parts.push(format!("Page {}", page + 1));

    if pager.has_page(page + 1) || pager.has_more() {
        parts.push("→ next".to_string());
    }

    if !window.is_empty() {
        let first = pager.current_offset() + 1;
        let last = pager.current_offset() + window.len();
        let more = if pager.has_more() { "+" } else { "" };

        parts.push(format!("showing {first}–{last} of {}{more}", pager.len()));
    }

    parts.join(" | ")
}

pub(super) fn card_detail_lines(card: &CardDetail) -> Vec<String> {
    let mut lines = vec![
        format!("Card id: {}", card.id),
        format!("Name: {}", card.name),
        format!("Type: {}", card_codes::type_name(card.type_code)),
    ];

    if !card.type_line.is_empty() {
        lines.push(format!("Catalog type: {}", card.type_line));
    }

    if card_codes::is_monster(card.type_code) {
        lines.push(format!("Race: {}", card_codes::race_name(card.race_code)));
        lines.push(format!(
            "Attribute: {}",
            card_codes::attribute_name(card.attribute_code)
        ));

        let level = card_codes::level(card.level);
        if level > 0 {
            lines.push(format!("Level: {level}"));
        }

        lines.push(format!("ATK: {}", card_codes::stat(card.attack)));
        lines.push(format!("DEF: {}", card_codes::stat(card.defense)));
    }

    if !card.pendulum_description.is_empty() {
        lines.push(String::new());
        lines.push("Pendulum effect:".to_string());
        lines.extend(card.pendulum_description.lines().map(str::to_string));
    }

    lines.push(String::new());
    lines.push("Effect:".to_string());
    lines.extend(card.description.lines().map(str::to_string));

    lines
}

fn help_line(mode: &Mode) -> String {
    controller::mapping_for(mode)
        .mapping
        .iter()
        .map(|entry| format!("{} {}", entry.key_label(), entry.description))
        .collect::<Vec<_>>()
        .join(" · ")
}
