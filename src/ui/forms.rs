use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// A field in one of the entry forms. `ALL` fixes the Tab order.
pub(crate) trait FormField: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }
}

/// Fields of the "New Camp" form, in the order the record operation takes
/// them.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum CampField {
    OrganizerName,
    OrganizerContact,
    CampName,
    Location,
    Date,
}

impl FormField for CampField {
    const ALL: &'static [Self] = &[
        CampField::OrganizerName,
        CampField::OrganizerContact,
        CampField::CampName,
        CampField::Location,
        CampField::Date,
    ];

    fn label(self) -> &'static str {
        match self {
            CampField::OrganizerName => "Organizer Name",
            CampField::OrganizerContact => "Organizer Contact",
            CampField::CampName => "Camp Name",
            CampField::Location => "Location",
            CampField::Date => "Date (YYYY-MM-DD)",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum DonorField {
    DonorName,
    Age,
    BloodGroup,
    Contact,
    CampId,
}

impl FormField for DonorField {
    const ALL: &'static [Self] = &[
        DonorField::DonorName,
        DonorField::Age,
        DonorField::BloodGroup,
        DonorField::Contact,
        DonorField::CampId,
    ];

    fn label(self) -> &'static str {
        match self {
            DonorField::DonorName => "Donor Name",
            DonorField::Age => "Age",
            DonorField::BloodGroup => "Blood Group",
            DonorField::Contact => "Contact",
            DonorField::CampId => "Camp ID",
        }
    }
}

/// Raw text typed into a form plus focus and the last error. Values are sent
/// to the record operations untouched; trimming and parsing happen there.
#[derive(Clone, Debug)]
pub(crate) struct EntryForm<F: FormField> {
    values: Vec<String>,
    pub(crate) active: F,
    pub(crate) error: Option<String>,
}

pub(crate) type CampForm = EntryForm<CampField>;
pub(crate) type DonorForm = EntryForm<DonorField>;

impl<F: FormField> Default for EntryForm<F> {
    fn default() -> Self {
        Self {
            values: vec![String::new(); F::ALL.len()],
            active: F::ALL[0],
            error: None,
        }
    }
}

impl<F: FormField> EntryForm<F> {
    pub(crate) fn value(&self, field: F) -> &str {
        &self.values[field.index()]
    }

    pub(crate) fn set_value(&mut self, field: F, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Move focus forward, wrapping to the first field.
    pub(crate) fn next_field(&mut self) {
        let next = (self.active.index() + 1) % F::ALL.len();
        self.active = F::ALL[next];
    }

    pub(crate) fn previous_field(&mut self) {
        let len = F::ALL.len();
        let previous = (self.active.index() + len - 1) % len;
        self.active = F::ALL[previous];
    }

    /// Append a character to the active field. Control characters are ignored.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.values[self.active.index()].push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.values[self.active.index()].pop();
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: F) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Column and row of the cursor relative to the form, with the column
    /// clamped to `max_column`.
    pub(crate) fn cursor_offset(&self, max_column: u16) -> (u16, u16) {
        let prefix = format!("{}: ", self.active.label()).chars().count();
        let column = prefix + self.value(self.active).chars().count();
        let column = u16::try_from(column).unwrap_or(u16::MAX).min(max_column);
        (column, self.active.index() as u16)
    }
}

impl CampForm {
    pub(crate) fn fields(&self) -> [&str; 5] {
        [
            self.value(CampField::OrganizerName),
            self.value(CampField::OrganizerContact),
            self.value(CampField::CampName),
            self.value(CampField::Location),
            self.value(CampField::Date),
        ]
    }
}

impl DonorForm {
    /// Start a donor form with the camp id already filled in.
    pub(crate) fn for_camp(camp_id: impl ToString) -> Self {
        let mut form = Self::default();
        form.set_value(DonorField::CampId, camp_id.to_string());
        form
    }

    pub(crate) fn fields(&self) -> [&str; 5] {
        [
            self.value(DonorField::DonorName),
            self.value(DonorField::Age),
            self.value(DonorField::BloodGroup),
            self.value(DonorField::Contact),
            self.value(DonorField::CampId),
        ]
    }
}

/// Camp id prompt shown on the donors screen.
#[derive(Default, Clone, Debug)]
pub(crate) struct CampLookup {
    pub(crate) query: String,
}
