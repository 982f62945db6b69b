use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

use crate::{
    app::{
        app::{FormState, InputField},
        portfolio::Portfolio,
        utils,
    },
    models::ProfitReport,
};

pub fn render(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    focus: InputField,
    form: &FormState,
    report: &Option<ProfitReport>,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_headline(frame, portfolio, chunks[0]);
    render_form(
        frame,
        form,
        focus,
        &[InputField::Name, InputField::Amount, InputField::Date],
        "New Holding",
        chunks[1],
    );
    render_form(
        frame,
        form,
        focus,
        &[InputField::From, InputField::To],
        "Report Range",
        chunks[2],
    );
    render_holdings(frame, portfolio, table_state, chunks[3]);
    render_report(frame, report, chunks[4]);
    render_footer(frame, chunks[5]);

    if let Some(message) = popup_message {
        render_popup(frame, message, Color::Cyan);
    }

    if let Some(message) = error_popup {
        render_popup(frame, message, Color::Red);
    }
}

fn render_headline(frame: &mut Frame, portfolio: &Portfolio, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new("Portfolio Profit Tracker")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, halves[0]);

    let values = Paragraph::new(format!(
        "Beginning Value: {}   Current Value: {}",
        utils::format_amount(portfolio.beginning_value()),
        utils::format_amount(portfolio.current_value()),
    ))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(values, halves[1]);
}

fn render_form(
    frame: &mut Frame,
    form: &FormState,
    focus: InputField,
    fields: &[InputField],
    title: &str,
    area: Rect,
) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Ratio(1, fields.len() as u32))
        .collect();

    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let style = if focus == *field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let label = if i == 0 {
            format!("{}: {}", title, field.label())
        } else {
            field.label().to_string()
        };

        let input = Paragraph::new(form.field(*field))
            .style(style)
            .block(Block::default().title(label).borders(Borders::ALL));

        frame.render_widget(input, boxes[i]);
    }
}

fn render_holdings(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    area: Rect,
) {
    let holdings = portfolio.holdings();

    if holdings.is_empty() {
        let empty_message =
            Paragraph::new("No holdings in this portfolio yet. Add some above or press F4 to import.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = ["Stock", "G/L $", "Date"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = holdings.iter().map(|holding| {
        let price = *holding.price();
        let price_color = if price >= 0.0 { Color::Green } else { Color::Red };

        let date = match holding.acquired_at() {
            Some(acquired_at) => acquired_at.format("%Y-%m-%d").to_string(),
            None => String::from("invalid date"),
        };

        let cells = [
            Cell::from(holding.name().to_string()),
            Cell::from(format!("{:.2}", price)).style(Style::default().fg(price_color)),
            Cell::from(date),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(40),
        Constraint::Length(15),
        Constraint::Length(15),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_report(frame: &mut Frame, report: &Option<ProfitReport>, area: Rect) {
    let text = match report {
        Some(report) => format!(
            "Total Profit:      {:.2}\nOverall Return:    {:.4}\nAnnualized Return: {:.4}",
            report.profit(),
            report.overall_return(),
            report.annualized_return(),
        ),
        None => String::from("Enter a From/To range and press F5 to calculate."),
    };

    let panel = Paragraph::new(text).block(Block::default().title("Report").borders(Borders::ALL));

    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Tab: next field | Enter: add / calculate | F4: re-import | F5: report | Up/Down: select | Esc: clear | F10: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_popup(frame: &mut Frame, message: &str, color: Color) {
    let area = centered_rect(60, 20, frame.area());
    let popup = Paragraph::new(message)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
