use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::attachment;
use crate::io::config_io;
use crate::io::state::{self, UiState};
use crate::io::store;
use crate::model::{
    Attachment, FolioConfig, Portfolio, Project, ProjectDraft, ProjectId, Technology,
};
use crate::ops::query::{self, SortKey, TechFilter};
use crate::ops::reducer::{self, Command, Outcome};

use super::input;
use super::render;
use super::theme::{Theme, ThemeKind};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Form,
    Confirm,
    Detail,
}

/// Card arrangement: two-column grid or single-column list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    Grid,
    List,
}

impl CardLayout {
    pub fn toggle(self) -> CardLayout {
        match self {
            CardLayout::Grid => CardLayout::List,
            CardLayout::List => CardLayout::Grid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardLayout::Grid => "grid",
            CardLayout::List => "list",
        }
    }

    pub fn parse(s: &str) -> Option<CardLayout> {
        match s {
            "grid" => Some(CardLayout::Grid),
            "list" => Some(CardLayout::List),
            _ => None,
        }
    }
}

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    StartDate,
    EndDate,
    Description,
    Technologies,
    Attachment,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::StartDate,
            FormField::StartDate => FormField::EndDate,
            FormField::EndDate => FormField::Description,
            FormField::Description => FormField::Technologies,
            FormField::Technologies => FormField::Attachment,
            FormField::Attachment => FormField::Name,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::Attachment,
            FormField::StartDate => FormField::Name,
            FormField::EndDate => FormField::StartDate,
            FormField::Description => FormField::EndDate,
            FormField::Technologies => FormField::Description,
            FormField::Attachment => FormField::Technologies,
        }
    }
}

/// Explicit form state: the record-shaped input being typed, the pending
/// attachment, and the pending edit target. Nothing here lives in ambient
/// globals; submit handling reads it all from this struct.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub field: FormField,
    pub name: String,
    /// Date fields hold raw text; parsed on submit
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub technologies: Vec<Technology>,
    /// Checkbox focus within the technologies row
    pub tech_cursor: usize,
    /// Path typed into the attachment field; encoded on submit
    pub attachment_path: String,
    /// Attachment carried over from the record being edited. Used when no
    /// new path is typed, so editing never silently drops a file.
    pub pending_attachment: Option<Attachment>,
    /// Which record this submit updates; None appends
    pub pending_edit: Option<ProjectId>,
}

impl FormState {
    /// Form contents that editing `project` starts from
    pub fn prefill(project: &Project) -> FormState {
        FormState {
            name: project.name.clone(),
            start_date: project.start_date.map(|d| d.to_string()).unwrap_or_default(),
            end_date: project.end_date.map(|d| d.to_string()).unwrap_or_default(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            pending_attachment: project.attachment.clone(),
            pending_edit: Some(project.id),
            ..Default::default()
        }
    }

    /// The text buffer behind the focused field, if it is a text field
    pub fn active_buffer_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Name => Some(&mut self.name),
            FormField::StartDate => Some(&mut self.start_date),
            FormField::EndDate => Some(&mut self.end_date),
            FormField::Description => Some(&mut self.description),
            FormField::Attachment => Some(&mut self.attachment_path),
            FormField::Technologies => None,
        }
    }

    /// Toggle the checkbox under the tech cursor
    pub fn toggle_tech(&mut self) {
        let tech = Technology::ALL[self.tech_cursor % Technology::ALL.len()];
        if let Some(idx) = self.technologies.iter().position(|t| *t == tech) {
            self.technologies.remove(idx);
        } else {
            self.technologies.push(tech);
        }
    }
}

/// A delete waiting on y/n
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub id: ProjectId,
    pub name: String,
}

/// Main application state
pub struct App {
    pub dir: PathBuf,
    pub portfolio: Portfolio,
    pub config: FolioConfig,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub layout: CardLayout,
    /// Session-local view order; never persisted
    pub sort: Option<SortKey>,
    pub filter: TechFilter,
    /// Cursor index into the visible (sorted/filtered) list
    pub cursor: usize,
    pub scroll_offset: usize,
    pub form: FormState,
    pub confirm: Option<ConfirmState>,
    /// Record shown in the detail popup
    pub detail: Option<ProjectId>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(dir: PathBuf, portfolio: Portfolio, config: FolioConfig) -> Self {
        let theme_kind = config
            .ui
            .theme
            .as_deref()
            .and_then(ThemeKind::parse)
            .unwrap_or(ThemeKind::Dark);
        let layout = config
            .ui
            .layout
            .as_deref()
            .and_then(CardLayout::parse)
            .unwrap_or(CardLayout::Grid);
        let theme = Theme::from_config(theme_kind, &config.ui);

        App {
            dir,
            portfolio,
            config,
            mode: Mode::Navigate,
            should_quit: false,
            theme_kind,
            theme,
            layout,
            sort: None,
            filter: TechFilter::default(),
            cursor: 0,
            scroll_offset: 0,
            form: FormState::default(),
            confirm: None,
            detail: None,
            status_message: None,
        }
    }

    /// The sorted/filtered list currently on screen. Recomputed from the
    /// portfolio each time; the stored order is never changed by viewing.
    pub fn visible(&self) -> Vec<Project> {
        query::visible_projects(&self.portfolio.projects, self.sort, self.filter)
    }

    pub fn selected(&self) -> Option<Project> {
        self.visible().get(self.cursor).cloned()
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Apply a command and persist if it mutated. A failed save leaves the
    /// in-memory state on screen and reports through the status row.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = reducer::apply(&mut self.portfolio, command);
        if outcome.mutated()
            && let Err(e) = store::save_portfolio(&self.dir, &self.portfolio)
        {
            self.status_message = Some(format!("save failed: {}", e));
        }
        outcome
    }

    pub fn begin_create(&mut self) {
        self.form = FormState::default();
        self.mode = Mode::Form;
        self.status_message = None;
    }

    /// Load the selected record into the form. Starting a second edit simply
    /// replaces the pending target.
    pub fn begin_edit(&mut self) {
        if let Some(project) = self.selected() {
            self.form = FormState::prefill(&project);
            self.mode = Mode::Form;
            self.status_message = None;
        }
    }

    /// Submit the form: update the pending edit target, or append.
    pub fn submit_form(&mut self) {
        let start_date = match parse_form_date(&self.form.start_date) {
            Ok(d) => d,
            Err(msg) => {
                self.status_message = Some(msg);
                return;
            }
        };
        let end_date = match parse_form_date(&self.form.end_date) {
            Ok(d) => d,
            Err(msg) => {
                self.status_message = Some(msg);
                return;
            }
        };

        // A typed path replaces the carried-over attachment; otherwise keep it
        let attachment = if self.form.attachment_path.trim().is_empty() {
            self.form.pending_attachment.clone()
        } else {
            match attachment::encode_file(Path::new(self.form.attachment_path.trim())) {
                Ok(a) => Some(a),
                Err(e) => {
                    self.status_message = Some(e.to_string());
                    return;
                }
            }
        };

        let draft = ProjectDraft {
            name: self.form.name.clone(),
            start_date,
            end_date,
            description: self.form.description.clone(),
            technologies: self.form.technologies.clone(),
            attachment,
        };

        let command = match self.form.pending_edit {
            Some(id) => Command::Update(id, draft),
            None => Command::Create(draft),
        };

        match self.dispatch(command) {
            Outcome::Created(id) => {
                self.finish_form(format!("added {}", id));
            }
            Outcome::Updated(id) => {
                self.finish_form(format!("updated {}", id));
            }
            Outcome::Appended(id) => {
                self.finish_form(format!("original was deleted; added {}", id));
            }
            Outcome::Rejected(reason) => {
                // Stay in the form so nothing typed is lost
                self.status_message = Some(reason);
            }
            other => unreachable!("form submit produced {:?}", other),
        }
    }

    fn finish_form(&mut self, status: String) {
        self.form = FormState::default();
        self.mode = Mode::Navigate;
        self.status_message = Some(status);
        self.clamp_cursor();
    }

    /// Open the detail popup for the selected record
    pub fn open_detail(&mut self) {
        let Some(project) = self.selected() else {
            return;
        };
        if let Outcome::Detail(project) = self.dispatch(Command::ShowDetail(project.id)) {
            self.detail = Some(project.id);
            self.mode = Mode::Detail;
        }
    }

    /// Ask before deleting the selected record
    pub fn request_delete(&mut self) {
        if let Some(project) = self.selected() {
            self.confirm = Some(ConfirmState {
                id: project.id,
                name: project.name,
            });
            self.mode = Mode::Confirm;
        }
    }

    // -----------------------------------------------------------------------
    // View controls
    // -----------------------------------------------------------------------

    pub fn cycle_sort(&mut self) {
        self.sort = Some(match self.sort {
            Some(key) => key.next(),
            None => SortKey::Newest,
        });
        self.status_message = Some(format!("sort: {}", self.sort.unwrap().as_str()));
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.status_message = Some("sort: stored order".to_string());
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.status_message = Some(format!("filter: {}", self.filter.label()));
        self.clamp_cursor();
    }

    pub fn clear_filter(&mut self) {
        self.filter = TechFilter::All;
        self.status_message = Some("filter: all".to_string());
        self.clamp_cursor();
    }

    pub fn toggle_theme(&mut self) {
        self.theme_kind = self.theme_kind.toggle();
        self.theme = Theme::from_config(self.theme_kind, &self.config.ui);
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggle();
    }
}

/// Empty form date fields mean "no date"; anything else must be ISO
fn parse_form_date(text: &str) -> Result<Option<NaiveDate>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<NaiveDate>()
        .map(Some)
        .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", text))
}

// ---------------------------------------------------------------------------
// Entry point and event loop
// ---------------------------------------------------------------------------

pub fn run(dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = crate::cli::handlers::resolve_dir(dir)?;
    let config = config_io::load_config(&dir)?;
    let portfolio = store::load_portfolio(&dir);

    let mut app = App::new(dir, portfolio, config);
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn restore_ui_state(app: &mut App) {
    if let Some(saved) = state::read_ui_state(&app.dir) {
        if let Some(kind) = saved.theme.as_deref().and_then(ThemeKind::parse) {
            app.theme_kind = kind;
            app.theme = Theme::from_config(kind, &app.config.ui);
        }
        if let Some(layout) = saved.layout.as_deref().and_then(CardLayout::parse) {
            app.layout = layout;
        }
        app.cursor = saved.cursor;
        app.clamp_cursor();
    }
}

fn save_ui_state(app: &App) {
    let state = UiState {
        theme: Some(app.theme_kind.as_str().to_string()),
        layout: Some(app.layout.as_str().to_string()),
        cursor: app.cursor,
    };
    let _ = state::write_ui_state(&app.dir, &state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_with(names: &[&str]) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let mut portfolio = Portfolio::default();
        for name in names {
            let id = portfolio.allocate_id();
            portfolio.projects.push(
                ProjectDraft {
                    name: (*name).into(),
                    ..Default::default()
                }
                .into_project(id),
            );
        }
        let app = App::new(dir.path().to_path_buf(), portfolio, FolioConfig::default());
        (dir, app)
    }

    #[test]
    fn submit_appends_when_idle() {
        let (_dir, mut app) = app_with(&[]);
        app.begin_create();
        app.form.name = "Portfolio Site".into();
        app.submit_form();

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.portfolio.len(), 1);
        let stored = &app.portfolio.projects[0];
        assert!(stored.start_date.is_none());
        assert!(stored.end_date.is_none());
    }

    #[test]
    fn submit_with_blank_name_stays_in_form() {
        let (_dir, mut app) = app_with(&[]);
        app.begin_create();
        app.form.description = "text worth keeping".into();
        app.submit_form();

        assert_eq!(app.mode, Mode::Form);
        assert!(app.portfolio.is_empty());
        assert_eq!(app.form.description, "text worth keeping");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn edit_then_submit_keeps_length() {
        let (_dir, mut app) = app_with(&["Site"]);
        app.begin_edit();
        assert_eq!(app.form.pending_edit, Some(ProjectId(1)));

        app.form.name = "Site v2".into();
        app.submit_form();

        assert_eq!(app.portfolio.len(), 1);
        assert_eq!(app.portfolio.projects[0].name, "Site v2");
        assert!(app.form.pending_edit.is_none());
    }

    #[test]
    fn second_edit_replaces_pending_target() {
        let (_dir, mut app) = app_with(&["First", "Second"]);
        app.begin_edit();
        assert_eq!(app.form.pending_edit, Some(ProjectId(1)));

        app.cursor = 1;
        app.begin_edit();
        assert_eq!(app.form.pending_edit, Some(ProjectId(2)));
        assert_eq!(app.form.name, "Second");
    }

    #[test]
    fn submit_with_bad_date_reports_and_keeps_form() {
        let (_dir, mut app) = app_with(&[]);
        app.begin_create();
        app.form.name = "Site".into();
        app.form.start_date = "January 1st".into();
        app.submit_form();

        assert_eq!(app.mode, Mode::Form);
        assert!(app.portfolio.is_empty());
    }

    #[test]
    fn filter_narrows_cursor_range() {
        let (_dir, mut app) = app_with(&["a", "b", "c"]);
        app.cursor = 2;
        app.filter = TechFilter::Tech(Technology::NodeJs);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn edit_targets_record_not_position() {
        let (_dir, mut app) = app_with(&["Beta", "Alpha"]);
        // Sorted a-z the first visible card is "Alpha", stored second
        app.sort = Some(SortKey::NameAsc);
        app.cursor = 0;
        app.begin_edit();
        assert_eq!(app.form.pending_edit, Some(ProjectId(2)));
        app.form.name = "Alpha v2".into();
        app.submit_form();

        assert_eq!(app.portfolio.projects[1].name, "Alpha v2");
        assert_eq!(app.portfolio.projects[0].name, "Beta");
    }

    #[test]
    fn delete_confirm_targets_selected_record() {
        let (_dir, mut app) = app_with(&["First", "Second"]);
        app.cursor = 1;
        app.request_delete();
        assert_eq!(app.mode, Mode::Confirm);
        let confirm = app.confirm.clone().unwrap();
        assert_eq!(confirm.id, ProjectId(2));
        assert_eq!(confirm.name, "Second");
    }

    #[test]
    fn open_detail_sets_popup_target() {
        let (_dir, mut app) = app_with(&["Site"]);
        app.open_detail();
        assert_eq!(app.mode, Mode::Detail);
        assert_eq!(app.detail, Some(ProjectId(1)));
    }

    #[test]
    fn sort_cycle_starts_at_newest() {
        let (_dir, mut app) = app_with(&[]);
        app.cycle_sort();
        assert_eq!(app.sort, Some(SortKey::Newest));
        app.clear_sort();
        assert_eq!(app.sort, None);
    }
}
