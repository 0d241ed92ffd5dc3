use model::FEATURES;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::form::{FormState, NumberInput, Selector, BUTTON_ROW};
use crate::ui::theme::Theme;

/// Renders the whole dashboard from state: input sidebar on the left, the
/// selected record and prediction on the right.
pub fn draw(f: &mut Frame, state: &FormState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    draw_sidebar(f, cols[0], state);
    draw_main(f, cols[1], state);
}

fn draw_sidebar(f: &mut Frame, area: Rect, state: &FormState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Enter user info ")
        .title_style(Theme::title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(3); 6];
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(4));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    draw_selector(f, rows[0], FEATURES[0], &state.lines_of_code, state.focus == 0);
    draw_selector(f, rows[1], FEATURES[1], &state.ai_usage_hours, state.focus == 1);
    draw_selector(f, rows[2], FEATURES[2], &state.cognitive_load, state.focus == 2);
    draw_number_input(
        f,
        rows[3],
        FEATURES[3],
        &state.task_duration_hours,
        state.focus == 3,
    );
    draw_number_input(f, rows[4], FEATURES[4], &state.errors, state.focus == 4);
    draw_button(f, rows[5], state.focus == BUTTON_ROW);

    render_hints(
        f,
        rows[7],
        &[
            ("↑↓", "move"),
            ("◂▸", "change value"),
            ("enter", "predict"),
            ("q", "quit"),
        ],
    );
}

fn field_block(label: &str, focused: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { Theme::focus() } else { Theme::border() })
        .title(format!(" {label} "))
        .title_style(if focused { Theme::focus() } else { Theme::dim() })
}

fn draw_selector(f: &mut Frame, area: Rect, label: &str, selector: &Selector, focused: bool) {
    let block = field_block(label, focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let value_style = if focused { Theme::focus() } else { Theme::text() };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("◂ ", Theme::dim()),
            Span::styled(selector.value().to_string(), value_style),
            Span::styled(" ▸", Theme::dim()),
        ])),
        inner,
    );
}

fn draw_number_input(f: &mut Frame, area: Rect, label: &str, input: &NumberInput, focused: bool) {
    let block = field_block(label, focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = if input.text().is_empty() {
        vec![Span::styled("0", Theme::muted())]
    } else {
        vec![Span::styled(input.text(), Theme::text())]
    };
    if focused {
        spans.push(Span::styled("█", Theme::focus()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_button(f: &mut Frame, area: Rect, focused: bool) {
    let (border, label) = if focused {
        (Theme::focus(), Theme::focus())
    } else {
        (Theme::border(), Theme::text())
    };

    f.render_widget(
        Paragraph::new(Span::styled("Predict", label))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border)),
        area,
    );
}

fn draw_main(f: &mut Frame, area: Rect, state: &FormState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let metrics = state.metrics();
    let mut lines = vec![
        Line::from(Span::styled("Selected Input", Theme::title())),
        Line::from(""),
    ];

    for (label, value) in [
        (FEATURES[0], metrics.lines_of_code.to_string()),
        (FEATURES[1], metrics.ai_usage_hours.to_string()),
        (FEATURES[2], metrics.cognitive_load.to_string()),
        (FEATURES[3], metrics.task_duration_hours.to_string()),
        (FEATURES[4], metrics.errors.to_string()),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<22}"), Theme::dim()),
            Span::styled(value, Theme::text()),
        ]));
    }

    lines.push(Line::from(""));
    match state.prediction {
        Some(p) => lines.push(Line::from(Span::styled(
            format!("Predicted {}: {:.2}", state.target_label(), p),
            Theme::success(),
        ))),
        None => lines.push(Line::from(Span::styled(
            "press Predict to score the current input",
            Theme::muted(),
        ))),
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            hints
                .iter()
                .map(|_| Constraint::Length(1))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (i, (key, action)) in hints.iter().enumerate() {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("[{key}] "), Theme::title()),
                Span::styled(*action, Theme::dim()),
            ])),
            rows[i],
        );
    }
}
