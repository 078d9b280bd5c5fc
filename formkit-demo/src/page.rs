//! Page state: focus cycling, per-frame validity, submit gating.

use celldom::{Buffer, Key, KeyCombo, Rect, TextStyle};
use formkit::FormkitError;
use formkit::prelude::*;
use formkit::validation::Validatable;
use log::{debug, info};
use regex::Regex;

use crate::users::{self, User};

const FIELD_WIDTH: u16 = 46;
const SPECIAL_CHARS: &str = "@$!%*?&";

/// Focus ring order. Tab walks it forward, BackTab backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Password,
    Email,
    Search,
    Submit,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::Password,
            Self::Password => Self::Email,
            Self::Email => Self::Search,
            Self::Search => Self::Submit,
            Self::Submit => Self::Table,
            Self::Table => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::Table,
            Self::Password => Self::Name,
            Self::Email => Self::Password,
            Self::Search => Self::Email,
            Self::Submit => Self::Search,
            Self::Table => Self::Submit,
        }
    }

    fn is_input(self) -> bool {
        matches!(self, Self::Name | Self::Password | Self::Email | Self::Search)
    }
}

pub struct FormPage {
    theme: Theme,
    name: TextField,
    password: TextField,
    email: TextField,
    search: TextField,
    table: Table<User>,
    focus: Focus,
    /// Set by the first submit; errors stay hidden until then.
    attempted: bool,
    summary: Vec<String>,
    name_re: Regex,
    email_re: Regex,
    password_charset_re: Regex,
    running: bool,
}

impl FormPage {
    pub fn new() -> Result<Self, FormkitError> {
        let name = TextField::new()
            .label("Name")
            .placeholder("Enter your name")
            .helper("Only letters (min 3 characters)")
            .error_message("Name must be 3 to 30 letters")
            .clearable();
        let password = TextField::new()
            .label("Password")
            .placeholder("Enter password")
            .helper("Min 8 chars, 1 uppercase, 1 number, 1 special char")
            .error_message("Password does not meet the requirements")
            .kind(FieldKind::Maskable)
            .clearable();
        let email = TextField::new()
            .label("Email")
            .placeholder("you@example.com")
            .helper("Example: xxxx798@gmail.com")
            .error_message("Invalid email address")
            .variant(Variant::Filled)
            .size(FieldSize::Lg)
            .clearable();
        let search = TextField::new()
            .label("Search")
            .placeholder("Search users")
            .variant(Variant::Ghost)
            .size(FieldSize::Sm)
            .clearable();

        let table = Table::with_rows(users::columns(), users::dataset())
            .with_selection_mode(SelectionMode::Multiple);

        Ok(Self {
            theme: Theme::dark(),
            name,
            password,
            email,
            search,
            table,
            focus: Focus::Name,
            attempted: false,
            summary: Vec::new(),
            name_re: Regex::new(r"^[A-Za-z\s]{3,30}$")?,
            email_re: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
            password_charset_re: Regex::new(r"^[A-Za-z\d@$!%*?&]{8,}$")?,
            running: true,
        })
    }

    pub fn running(&self) -> bool {
        self.running
    }

    // -------------------------------------------------------------------------
    // Validity
    // -------------------------------------------------------------------------

    fn name_valid(&self) -> bool {
        self.name_re.is_match(&self.name.value())
    }

    fn email_valid(&self) -> bool {
        self.email_re.is_match(&self.email.value())
    }

    // Closed charset with minimum length, plus one presence check per
    // character class.
    fn password_valid(&self) -> bool {
        let value = self.password.value();
        self.password_charset_re.is_match(&value)
            && value.chars().any(|c| c.is_ascii_uppercase())
            && value.chars().any(|c| c.is_ascii_lowercase())
            && value.chars().any(|c| c.is_ascii_digit())
            && value.chars().any(|c| SPECIAL_CHARS.contains(c))
    }

    /// Push display validity into the fields. Errors only show once a
    /// submit has been attempted; the search field is never validated.
    pub fn refresh_validity(&self) {
        let checks = [
            (&self.name, self.name_valid()),
            (&self.password, self.password_valid()),
            (&self.email, self.email_valid()),
        ];
        for (field, valid) in checks {
            if self.attempted && !valid {
                field.set_invalid(true);
            } else {
                field.clear_error();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: &KeyCombo) {
        let result = match self.focus {
            Focus::Name => self.name.on_key(key),
            Focus::Password => self.password.on_key(key),
            Focus::Email => self.email.on_key(key),
            Focus::Search => self.search.on_key(key),
            Focus::Submit => EventResult::Ignored,
            Focus::Table => self.table.on_key(key),
        };
        if result.is_handled() {
            return;
        }

        match key.key {
            Key::Tab => self.focus = self.focus.next(),
            Key::BackTab => self.focus = self.focus.prev(),
            Key::Char('s') if key.modifiers.ctrl => self.submit(),
            Key::Enter if self.focus == Focus::Submit => self.submit(),
            Key::Char('c') if key.modifiers.ctrl => self.running = false,
            Key::Char('q') if !self.focus.is_input() => self.running = false,
            _ => {}
        }
    }

    /// Drain widget event queues after dispatch.
    pub fn drain_widget_events(&mut self) {
        let mut submit = false;
        for field in [&self.name, &self.password, &self.email, &self.search] {
            if field.take_events().contains(&FieldEvent::Submitted) {
                submit = true;
            }
        }
        if submit {
            self.submit();
        }

        for event in self.table.take_events() {
            match event {
                TableEvent::SelectionChange => {
                    let names: Vec<&str> =
                        self.table.selected_rows().iter().map(|u| u.name).collect();
                    info!("selected users: {names:?}");
                }
                TableEvent::SortChange => {
                    debug!("sort changed to {:?}", self.table.sort());
                }
            }
        }
    }

    fn submit(&mut self) {
        self.attempted = true;
        let result = Validator::new()
            .field(&self.name, "name")
            .required("Name is required")
            .pattern(self.name_re.clone(), "Name must be 3 to 30 letters")
            .field(&self.password, "password")
            .min_length(8, "Password needs at least 8 characters")
            .pattern(
                self.password_charset_re.clone(),
                "Password allows only letters, digits, and @$!%*?&",
            )
            .contains_char(|c| c.is_ascii_uppercase(), "Password needs an uppercase letter")
            .contains_char(|c| c.is_ascii_lowercase(), "Password needs a lowercase letter")
            .contains_char(|c| c.is_ascii_digit(), "Password needs a digit")
            .contains_char(
                |c| SPECIAL_CHARS.contains(c),
                "Password needs one of @$!%*?&",
            )
            .field(&self.email, "email")
            .required("Email is required")
            .pattern(self.email_re.clone(), "Invalid email address")
            .validate();
        if let Some(error) = result.first_error() {
            info!("submit blocked: {} - {}", error.field_name, error.message);
            return;
        }

        let selected: Vec<&str> = self.table.selected_rows().iter().map(|u| u.name).collect();
        info!(
            "form submitted: name={:?} email={:?} selected={selected:?}",
            self.name.value(),
            self.email.value()
        );
        self.summary = vec![
            "Submitted!".to_string(),
            format!("Name:  {}", self.name.value()),
            format!("Email: {}", self.email.value()),
            format!(
                "Selected users: {}",
                if selected.is_empty() {
                    "none".to_string()
                } else {
                    selected.join(", ")
                }
            ),
        ];

        self.name.clear();
        self.password.clear();
        self.email.clear();
        self.search.clear();
        self.attempted = false;
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area();
        buf.fill(area, self.theme.background);
        let content = area.shrink(1, 2, 1, 2);
        if content.is_empty() {
            return;
        }

        let mut y = content.top();
        buf.draw_str(
            content.left(),
            y,
            "User Registration",
            self.theme.primary,
            self.theme.background,
            TextStyle::new().bold(),
            content,
        );
        y += 2;

        let field_width = content.width.min(FIELD_WIDTH);
        let fields = [
            (&self.name, Focus::Name),
            (&self.password, Focus::Password),
            (&self.email, Focus::Email),
            (&self.search, Focus::Search),
        ];
        for (field, focus) in fields {
            let height = field.height();
            let rect = Rect::new(content.left(), y, field_width, height);
            field.render(buf, rect, &self.theme, self.focus == focus);
            y += height + 1;
        }

        let submit_focused = self.focus == Focus::Submit;
        let (fg, bg) = if submit_focused {
            (self.theme.background, self.theme.primary)
        } else {
            (self.theme.primary, self.theme.background)
        };
        buf.draw_str(
            content.left(),
            y,
            "[ Submit ]",
            fg,
            bg,
            TextStyle::new().bold(),
            content,
        );
        y += 2;

        for line in &self.summary {
            buf.draw_str(
                content.left(),
                y,
                line,
                self.theme.success,
                self.theme.background,
                TextStyle::new(),
                content,
            );
            y += 1;
        }
        if !self.summary.is_empty() {
            y += 1;
        }

        let remaining = content.bottom().saturating_sub(y);
        let table_rect = Rect::new(
            content.left(),
            y,
            content.width,
            self.table.height().min(remaining),
        );
        self.table
            .render(buf, table_rect, &self.theme, self.focus == Focus::Table);

        buf.draw_str(
            content.left(),
            content.bottom().saturating_sub(1),
            "Tab: focus  Ctrl+S: submit  Space: select  s: sort  q: quit",
            self.theme.text_muted,
            self.theme.background,
            TextStyle::new().dim(),
            area,
        );
    }
}
