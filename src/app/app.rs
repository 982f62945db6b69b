use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    app::{Portfolio, ui},
    models::{Holding, ProfitReport},
};

#[derive(Clone, Copy, Debug, EnumIter, Eq, PartialEq)]
pub enum InputField {
    Name,
    Amount,
    Date,
    From,
    To,
}

impl InputField {
    pub fn label(&self) -> &str {
        match self {
            InputField::Name => "Stock",
            InputField::Amount => "G/L $",
            InputField::Date => "Date (YYYY-MM-DD)",
            InputField::From => "From (YYYY-MM-DD)",
            InputField::To => "To (YYYY-MM-DD)",
        }
    }

    fn next(self) -> InputField {
        let fields: Vec<InputField> = InputField::iter().collect();
        let i = fields.iter().position(|field| *field == self).unwrap_or(0);
        fields[(i + 1) % fields.len()]
    }

    fn previous(self) -> InputField {
        let fields: Vec<InputField> = InputField::iter().collect();
        let i = fields.iter().position(|field| *field == self).unwrap_or(0);
        fields[(i + fields.len() - 1) % fields.len()]
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub from: String,
    pub to: String,
}

impl FormState {
    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Name => &self.name,
            InputField::Amount => &self.amount,
            InputField::Date => &self.date,
            InputField::From => &self.from,
            InputField::To => &self.to,
        }
    }

    fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Name => &mut self.name,
            InputField::Amount => &mut self.amount,
            InputField::Date => &mut self.date,
            InputField::From => &mut self.from,
            InputField::To => &mut self.to,
        }
    }

    fn reset_holding_fields(&mut self) {
        self.name.clear();
        self.amount.clear();
        self.date.clear();
    }
}

pub struct App {
    portfolio: Portfolio,
    import_path: Option<String>,
    form: FormState,
    focus: InputField,
    report: Option<ProfitReport>,
    table_state: TableState,
    popup_message: Option<String>,
    error_popup: Option<String>,
}

impl App {
    pub fn new(portfolio: Portfolio, import_path: Option<String>) -> Self {
        Self {
            portfolio,
            import_path,
            form: FormState::default(),
            focus: InputField::Name,
            report: None,
            table_state: TableState::default(),
            popup_message: None,
            error_popup: None,
        }
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    // Never fails: the form strings go through the same coercion the CSV
    // import uses, and a bad amount or date still produces a holding.
    fn submit_holding(&mut self) {
        let holding = Holding::from_input(&self.form.name, &self.form.amount, &self.form.date);
        self.portfolio.add_holding(holding);
        self.form.reset_holding_fields();
        self.focus = InputField::Name;
        self.table_state.select(None);
    }

    fn calculate_report(&mut self) {
        self.report = Some(self.portfolio.report(&self.form.from, &self.form.to));
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.portfolio,
                    &mut self.table_state,
                    self.focus,
                    &self.form,
                    &self.report,
                    &self.popup_message,
                    &self.error_popup,
                )
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    return Ok(());
                }

                match key.code {
                    KeyCode::F(10) => return Ok(()),
                    KeyCode::Esc => {
                        if self.error_popup.is_some() {
                            self.clear_error_popup();
                            continue;
                        }
                        self.clear_popup();
                        self.table_state.select(None);
                    }
                    KeyCode::Tab => self.focus = self.focus.next(),
                    KeyCode::BackTab => self.focus = self.focus.previous(),
                    KeyCode::Enter => {
                        if self.error_popup.is_some() {
                            self.clear_error_popup();
                            continue;
                        }
                        match self.focus {
                            InputField::Name | InputField::Amount | InputField::Date => {
                                self.submit_holding()
                            }
                            InputField::From | InputField::To => self.calculate_report(),
                        }
                    }
                    KeyCode::F(5) => self.calculate_report(),
                    KeyCode::F(4) => {
                        let Some(path) = self.import_path.clone() else {
                            continue;
                        };

                        self.table_state.select(None);
                        self.show_popup("Importing holdings...");
                        terminal.draw(|frame| {
                            ui::render(
                                frame,
                                &self.portfolio,
                                &mut self.table_state,
                                self.focus,
                                &self.form,
                                &self.report,
                                &self.popup_message,
                                &self.error_popup,
                            )
                        })?;

                        let expanded = shellexpand::tilde(&path);
                        let import_result = self.portfolio.import_holdings(&expanded);

                        self.clear_popup();
                        match import_result {
                            Ok(count) => {
                                self.show_popup(&format!("Imported {} holdings", count))
                            }
                            Err(e) => self.show_error_popup(&format!(
                                "Error importing holdings: {:?}",
                                e
                            )),
                        }
                    }
                    KeyCode::Down => {
                        let holdings = self.portfolio.holdings();
                        if !holdings.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i >= holdings.len() - 1 {
                                        0
                                    } else {
                                        i + 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Up => {
                        let holdings = self.portfolio.holdings();
                        if !holdings.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i == 0 {
                                        holdings.len() - 1
                                    } else {
                                        i - 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Backspace => {
                        self.form.field_mut(self.focus).pop();
                    }
                    KeyCode::Char(c) => {
                        self.form.field_mut(self.focus).push(c);
                    }
                    _ => {}
                }
            }
        }
    }
}
