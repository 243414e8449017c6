use std::mem;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::db::Store;
use crate::models::{CampId, CampSummary, DonorSummary};

use super::forms::{CampForm, CampLookup, DonorForm, EntryForm, FormField};
use super::helpers::{centered_rect, step_selection, surface_error};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Title bar with the screen tabs.
const HEADER_HEIGHT: u16 = 3;

/// The two list views.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Screen {
    Camps,
    Donors,
}

/// Fine-grained modes layered over the current screen.
enum Mode {
    Normal,
    AddingCamp(CampForm),
    AddingDonor(DonorForm),
    LookingUpCamp(CampLookup),
}

/// Donors last loaded for a camp id, as typed by the user.
#[derive(Default)]
struct DonorView {
    camp_id: Option<String>,
    donors: Vec<DonorSummary>,
    selected: usize,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. Only form text and the
/// rows currently on screen live here; every change goes through the store.
pub struct App {
    store: Store,
    camps: Vec<CampSummary>,
    selected: usize,
    donor_view: DonorView,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: Store, camps: Vec<CampSummary>) -> Self {
        Self {
            store,
            camps,
            selected: 0,
            donor_view: DonorView::default(),
            screen: Screen::Camps,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Apply one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingCamp(form) => self.handle_add_camp(code, form)?,
            Mode::AddingDonor(form) => self.handle_add_donor(code, form)?,
            Mode::LookingUpCamp(lookup) => self.handle_lookup(code, lookup)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.clear_status();
                self.screen = match self.screen {
                    Screen::Camps => Screen::Donors,
                    Screen::Donors => Screen::Camps,
                };
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                return Ok(Mode::AddingCamp(CampForm::default()));
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                let form = match self.screen {
                    Screen::Camps => self.current_camp().map(|camp| DonorForm::for_camp(camp.id)),
                    Screen::Donors => self.donor_view.camp_id.as_ref().map(DonorForm::for_camp),
                }
                .unwrap_or_default();
                return Ok(Mode::AddingDonor(form));
            }
            KeyCode::Char('r') | KeyCode::Char('R') => match self.screen {
                Screen::Camps => {
                    self.reload_camps()?;
                    self.set_status("Camps refreshed.", StatusKind::Info);
                }
                Screen::Donors => self.refresh_donors(),
            },
            KeyCode::Char('/') if self.screen == Screen::Donors => {
                return Ok(Mode::LookingUpCamp(CampLookup::default()));
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::Enter if self.screen == Screen::Camps => {
                if let Some(camp) = self.current_camp() {
                    let camp_id = camp.id.to_string();
                    if self.show_donors(&camp_id) {
                        self.screen = Screen::Donors;
                    }
                } else {
                    self.set_status("No camp selected.", StatusKind::Error);
                }
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_add_camp(&mut self, code: KeyCode, mut form: CampForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add camp cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                let [organizer_name, organizer_contact, camp_name, location, date] = form.fields();
                match self.store.add_camp(
                    organizer_name,
                    organizer_contact,
                    camp_name,
                    location,
                    date,
                ) {
                    Ok(camp_id) => {
                        self.reload_camps()?;
                        self.focus_camp(camp_id);
                        self.set_status("Camp added successfully!", StatusKind::Info);
                        keep_open = false;
                    }
                    Err(err) => {
                        let message = err.to_string();
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingCamp(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_add_donor(&mut self, code: KeyCode, mut form: DonorForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add donor cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                let [donor_name, age, blood_group, contact, camp_id] = form.fields();
                match self
                    .store
                    .add_donor(donor_name, age, blood_group, contact, camp_id)
                {
                    Ok(donor_id) => {
                        let camp_id = camp_id.trim().to_string();
                        debug!(%donor_id, camp_id = %camp_id, "refreshing donors after insert");
                        self.show_donors(&camp_id);
                        self.screen = Screen::Donors;
                        self.set_status("Donor added successfully!", StatusKind::Info);
                        keep_open = false;
                    }
                    Err(err) => {
                        let message = err.to_string();
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingDonor(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_lookup(&mut self, code: KeyCode, mut lookup: CampLookup) -> Result<Mode> {
        match code {
            KeyCode::Esc => return Ok(Mode::Normal),
            KeyCode::Backspace => {
                lookup.query.pop();
            }
            KeyCode::Enter => {
                let query = lookup.query.trim().to_string();
                if query.is_empty() {
                    self.set_status("Please enter Camp ID", StatusKind::Error);
                } else if self.show_donors(&query) {
                    return Ok(Mode::Normal);
                }
            }
            KeyCode::Char(ch) if !ch.is_control() => lookup.query.push(ch),
            _ => {}
        }
        Ok(Mode::LookingUpCamp(lookup))
    }

    /// Load the donors for `camp_id` into the donors view. Failures land in
    /// the footer and leave the previous rows in place.
    fn show_donors(&mut self, camp_id: &str) -> bool {
        let loaded = self
            .store
            .list_donors_by_camp(camp_id)
            .with_context(|| format!("failed to load donors for camp {camp_id}"));

        match loaded {
            Ok(donors) => {
                let message = match donors.len() {
                    0 => format!("No donors recorded for camp {camp_id}."),
                    1 => format!("1 donor at camp {camp_id}."),
                    count => format!("{count} donors at camp {camp_id}."),
                };
                self.donor_view = DonorView {
                    camp_id: Some(camp_id.to_string()),
                    donors,
                    selected: 0,
                };
                self.set_status(message, StatusKind::Info);
                true
            }
            Err(err) => {
                self.set_status(surface_error(&err), StatusKind::Error);
                false
            }
        }
    }

    fn refresh_donors(&mut self) {
        match self.donor_view.camp_id.clone() {
            Some(camp_id) => {
                self.show_donors(&camp_id);
            }
            None => self.set_status("Please enter Camp ID", StatusKind::Error),
        }
    }

    fn reload_camps(&mut self) -> Result<()> {
        self.camps = self.store.list_camps().context("failed to load camps")?;
        if self.selected >= self.camps.len() {
            self.selected = self.camps.len().saturating_sub(1);
        }
        Ok(())
    }

    fn focus_camp(&mut self, camp_id: CampId) {
        if let Some(idx) = self.camps.iter().position(|camp| camp.id == camp_id) {
            self.selected = idx;
        }
    }

    fn current_camp(&self) -> Option<&CampSummary> {
        self.camps.get(self.selected)
    }

    fn move_selection(&mut self, offset: isize) {
        match self.screen {
            Screen::Camps => {
                self.selected = step_selection(self.selected, offset, self.camps.len());
            }
            Screen::Donors => {
                let view = &mut self.donor_view;
                view.selected = step_selection(view.selected, offset, view.donors.len());
            }
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT.min(area.height)),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        match self.screen {
            Screen::Camps => self.draw_camps(frame, chunks[1]),
            Screen::Donors => self.draw_donors(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::AddingCamp(form) => self.draw_form(frame, area, " New Camp ", form),
            Mode::AddingDonor(form) => self.draw_form(frame, area, " New Donor ", form),
            Mode::LookingUpCamp(lookup) => self.draw_lookup(frame, area, lookup),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let active = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let tab = |label: &'static str, screen: Screen| {
            if self.screen == screen {
                Span::styled(format!("[{label}]"), active)
            } else {
                Span::raw(format!(" {label} "))
            }
        };

        let line = Line::from(vec![
            tab("Camps", Screen::Camps),
            Span::raw("  "),
            tab("Donors", Screen::Donors),
        ]);
        let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Blood Donation Management System "),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_camps(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Camps ");
        if self.camps.is_empty() {
            let message = Paragraph::new("No camps yet. Press 'c' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let rows = self.camps.iter().map(|camp| {
            Row::new(vec![
                Cell::from(camp.id.to_string()),
                Cell::from(camp.camp_name.clone()),
                Cell::from(camp.location.clone()),
                Cell::from(camp.date.clone()),
                Cell::from(camp.organizer_name.clone()),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(30),
                Constraint::Percentage(25),
                Constraint::Length(12),
                Constraint::Percentage(30),
            ],
        )
        .header(header_row(&["ID", "Camp Name", "Location", "Date", "Organizer"]))
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_donors(&self, frame: &mut Frame, area: Rect) {
        let view = &self.donor_view;
        let title = match &view.camp_id {
            Some(camp_id) => format!(" Donors at camp {camp_id} "),
            None => " Donors ".to_string(),
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        if view.donors.is_empty() {
            let text = if view.camp_id.is_some() {
                "No donors recorded for this camp."
            } else {
                "Press '/' and enter a Camp ID to list its donors."
            };
            let message = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let rows = view.donors.iter().map(|donor| {
            Row::new(vec![
                Cell::from(donor.id.to_string()),
                Cell::from(donor.donor_name.clone()),
                Cell::from(donor.age.to_string()),
                Cell::from(donor.blood_group.clone()),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(50),
                Constraint::Length(5),
                Constraint::Length(12),
            ],
        )
        .header(header_row(&["ID", "Name", "Age", "Blood Group"]))
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default().with_selected(Some(view.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hints: &[(&str, &str)] = match (&self.mode, self.screen) {
            (Mode::AddingCamp(_) | Mode::AddingDonor(_), _) => &[
                ("[Tab]", " Next field   "),
                ("[Enter]", " Save   "),
                ("[Esc]", " Cancel"),
            ],
            (Mode::LookingUpCamp(_), _) => &[("[Enter]", " Show donors   "), ("[Esc]", " Cancel")],
            (Mode::Normal, Screen::Camps) => &[
                ("[↑↓]", " Navigate   "),
                ("[Enter]", " Donors   "),
                ("[c]", " New camp   "),
                ("[d]", " New donor   "),
                ("[r]", " Refresh   "),
                ("[Tab]", " Donors view   "),
                ("[q]", " Quit"),
            ],
            (Mode::Normal, Screen::Donors) => &[
                ("[/]", " Camp ID   "),
                ("[d]", " New donor   "),
                ("[r]", " Refresh   "),
                ("[Tab]", " Camps view   "),
                ("[q]", " Quit"),
            ],
        };

        let spans = hints
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(key.to_string(), key_style),
                    Span::raw(action.to_string()),
                ]
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn draw_form<F: FormField>(&self, frame: &mut Frame, area: Rect, title: &str, form: &EntryForm<F>) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = F::ALL.iter().map(|field| form.build_line(*field)).collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (column, row) = form.cursor_offset(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + column, inner.y + row));
    }

    fn draw_lookup(&self, frame: &mut Frame, area: Rect, lookup: &CampLookup) {
        let popup_area = centered_rect(40, 20, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title(" Show Donors ");
        let paragraph = Paragraph::new(Span::raw(format!("Camp ID: {}", lookup.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let column = "Camp ID: ".len() + lookup.query.chars().count();
        let column = u16::try_from(column)
            .unwrap_or(u16::MAX)
            .min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + column, inner.y));
    }
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().copied().map(Cell::from)).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::forms::{CampField, DonorField};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let store = Store::in_memory().unwrap();
        store.initialize().unwrap();
        App::new(store, Vec::new())
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
    }

    fn fill_fields(app: &mut App, values: &[&str]) {
        for (idx, value) in values.iter().enumerate() {
            if idx > 0 {
                app.handle_key(KeyCode::Tab).unwrap();
            }
            type_text(app, value);
        }
        app.handle_key(KeyCode::Enter).unwrap();
    }

    fn add_spring_drive(app: &mut App) {
        app.handle_key(KeyCode::Char('c')).unwrap();
        fill_fields(app, &["Red Cross", "555-0100", "Spring Drive", "City Hall", "2024-05-01"]);
    }

    fn status_text(app: &App) -> Option<(&str, StatusKind)> {
        app.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.kind))
    }

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn camp_form_adds_and_lists_a_camp() {
        let mut app = app();
        add_spring_drive(&mut app);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), Some(("Camp added successfully!", StatusKind::Info)));
        assert_eq!(app.camps.len(), 1);
        assert_eq!(app.camps[0].organizer_name, "Red Cross");
        assert!(rendered(&app).contains("Spring Drive"));
    }

    #[test]
    fn invalid_camp_keeps_the_form_open() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c')).unwrap();
        fill_fields(&mut app, &["Red Cross", "555-0100", "Spring Drive", "City Hall", "2024/05/01"]);

        match &app.mode {
            Mode::AddingCamp(form) => {
                assert_eq!(form.error.as_deref(), Some("Invalid date format. Use YYYY-MM-DD"));
                assert_eq!(form.value(CampField::Date), "2024/05/01");
            }
            _ => panic!("camp form should stay open"),
        }
        assert!(app.camps.is_empty());
    }

    #[test]
    fn donor_form_uses_selected_camp_and_shows_donors() {
        let mut app = app();
        add_spring_drive(&mut app);

        app.handle_key(KeyCode::Char('d')).unwrap();
        match &app.mode {
            Mode::AddingDonor(form) => assert_eq!(form.value(DonorField::CampId), "1"),
            _ => panic!("donor form should be open"),
        }
        // Camp ID is pre-filled, so only the first four fields are typed.
        fill_fields(&mut app, &["Jane Doe", "30", "a+", "555-0200"]);

        assert_eq!(status_text(&app), Some(("Donor added successfully!", StatusKind::Info)));
        assert_eq!(app.screen, Screen::Donors);
        assert_eq!(app.donor_view.donors.len(), 1);
        assert_eq!(app.donor_view.donors[0].blood_group, "A+");
        assert!(rendered(&app).contains("Jane Doe"));
    }

    #[test]
    fn donor_for_missing_camp_reports_the_store_error() {
        let mut app = app();
        app.handle_key(KeyCode::Char('d')).unwrap();
        fill_fields(&mut app, &["Jane Doe", "30", "A+", "555-0200", "9"]);

        assert!(matches!(app.mode, Mode::AddingDonor(_)));
        let (text, kind) = status_text(&app).unwrap();
        assert_eq!(kind, StatusKind::Error);
        assert!(text.starts_with("referential integrity violated"));
    }

    #[test]
    fn lookup_requires_a_camp_id() {
        let mut app = app();
        app.handle_key(KeyCode::Tab).unwrap();
        app.handle_key(KeyCode::Char('/')).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.mode, Mode::LookingUpCamp(_)));
        assert_eq!(status_text(&app), Some(("Please enter Camp ID", StatusKind::Error)));

        type_text(&mut app, "x1");
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(status_text(&app), Some(("Invalid Camp ID format", StatusKind::Error)));

        app.handle_key(KeyCode::Backspace).unwrap();
        app.handle_key(KeyCode::Backspace).unwrap();
        type_text(&mut app, "7");
        app.handle_key(KeyCode::Enter).unwrap();
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.donor_view.camp_id.as_deref(), Some("7"));
        assert!(app.donor_view.donors.is_empty());
    }

    #[test]
    fn donor_form_on_donors_screen_uses_loaded_camp() {
        let mut app = app();
        app.handle_key(KeyCode::Tab).unwrap();
        app.handle_key(KeyCode::Char('d')).unwrap();
        match &app.mode {
            Mode::AddingDonor(form) => assert_eq!(form.value(DonorField::CampId), ""),
            _ => panic!("donor form should be open"),
        }
        app.handle_key(KeyCode::Esc).unwrap();

        app.handle_key(KeyCode::Char('/')).unwrap();
        type_text(&mut app, "3");
        app.handle_key(KeyCode::Enter).unwrap();
        app.handle_key(KeyCode::Char('d')).unwrap();
        match &app.mode {
            Mode::AddingDonor(form) => assert_eq!(form.value(DonorField::CampId), "3"),
            _ => panic!("donor form should be open"),
        }
    }

    #[test]
    fn long_input_renders_without_overflow() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c')).unwrap();
        type_text(&mut app, &"x".repeat(500));
        assert!(rendered(&app).contains("Organizer Name"));
    }

    #[test]
    fn escape_quits_only_from_normal_mode() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c')).unwrap();
        assert!(!app.handle_key(KeyCode::Esc).unwrap());
        assert!(app.handle_key(KeyCode::Esc).unwrap());
    }
}
