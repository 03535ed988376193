use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, EnableBracketedPaste, Event, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Widget,
    Frame, Terminal,
};

use crate::config::{Config, KeyCombo, KeyContext};
use crate::data::{OrganizationStore, SortField, StoreError};
use crate::ui::action::Action;
use crate::ui::components::{
    ConfirmationContext, ConfirmationDialog, ConfirmationDialogState, FormMode, GlobalFooter,
    OrgFormDialog, OrgFormState, OrgTable, Pager, SearchBar, StatusLine, TextInputState,
};
use crate::ui::events::InputMode;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view_state::DirectoryView;

/// Frame interval of the run loop
const FRAME: Duration = Duration::from_millis(16);

/// One-line message under the pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Main application state
pub struct App {
    config: Config,
    store: OrganizationStore,
    view: DirectoryView,
    search_input: TextInputState,
    form: OrgFormState,
    confirm: ConfirmationDialogState,
    input_mode: InputMode,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, store: OrganizationStore) -> Self {
        let mut view = DirectoryView::new(config.page_size, config.search_debounce);
        view.refresh(&store);

        Self {
            config,
            store,
            view,
            search_input: TextInputState::new(),
            form: OrgFormState::new(),
            confirm: ConfirmationDialogState::new(),
            input_mode: InputMode::Table,
            status: None,
            should_quit: false,
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut guard = TerminalGuard::new();
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::time::sleep(FRAME).await;

            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Paste(text) => self.handle_paste(&text),
                    _ => {}
                }
                if self.should_quit {
                    break;
                }
            }

            self.tick(Instant::now());

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply a debounced search whose quiet period has elapsed
    pub fn tick(&mut self, now: Instant) {
        self.view.tick(now, &self.store);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.handle_key_event_at(key, Instant::now());
    }

    /// Dispatch a key press as if it arrived at `now`
    pub fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let combo = KeyCombo::from_key_event(&key);
        let context = KeyContext::from_input_mode(self.input_mode);
        let action = self.config.keybindings.get_action(&combo, context);

        if let Some(action) = action {
            tracing::trace!(?action, ?context, key = %combo, "Key action");
            self.dispatch(action, now);
            return;
        }

        // Unbound printable keys type into the focused input
        if let event::KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.insert_text(&c.to_string(), now);
            }
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        self.insert_text(&flat, Instant::now());
    }

    fn insert_text(&mut self, text: &str, now: Instant) {
        match self.input_mode {
            InputMode::Search => {
                self.search_input.insert_str(text);
                self.view.queue_search(self.search_input.value(), now);
            }
            InputMode::Form => self.form.focused_input_mut().insert_str(text),
            InputMode::Table | InputMode::ConfirmDelete => {}
        }
    }

    fn dispatch(&mut self, action: Action, now: Instant) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Table => self.handle_table_action(action),
            InputMode::Search => self.handle_search_action(action, now),
            InputMode::Form => self.handle_form_action(action),
            InputMode::ConfirmDelete => self.handle_dialog_action(action),
        }
    }

    fn handle_table_action(&mut self, action: Action) {
        match action {
            Action::FocusSearch => self.input_mode = InputMode::Search,
            Action::ClearSearch => {
                self.search_input.clear();
                self.view.clear_search(&self.store);
            }
            Action::AddRecord => {
                self.form.open_add();
                self.input_mode = InputMode::Form;
            }
            Action::EditRecord => {
                if let Some(org) = self.view.selected_record().cloned() {
                    self.form.open_edit(&org);
                    self.input_mode = InputMode::Form;
                }
            }
            Action::DeleteRecord => {
                if let Some(id) = self.view.selected_record().map(|o| o.id.clone()) {
                    self.confirm.show_delete(id);
                    self.input_mode = InputMode::ConfirmDelete;
                }
            }
            Action::SortByName => self.view.toggle_sort(SortField::Name, &self.store),
            Action::SortByDirector => self.view.toggle_sort(SortField::Director, &self.store),
            Action::PrevPage => self.view.prev_page(&self.store),
            Action::NextPage => self.view.next_page(&self.store),
            Action::SelectNext => self.view.select_next(),
            Action::SelectPrev => self.view.select_prev(),
            _ => {}
        }
    }

    fn handle_search_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Submit => {
                self.view.flush_search(&self.store);
                self.input_mode = InputMode::Table;
            }
            Action::Cancel => {
                self.search_input.clear();
                self.view.clear_search(&self.store);
                self.input_mode = InputMode::Table;
            }
            action if action.is_text_edit() => {
                let before = self.search_input.value().to_string();
                apply_text_edit(&mut self.search_input, action);
                if self.search_input.value() != before {
                    self.view.queue_search(self.search_input.value(), now);
                }
            }
            _ => {}
        }
    }

    fn handle_form_action(&mut self, action: Action) {
        match action {
            Action::NextField => self.form.next_field(),
            Action::PrevField => self.form.prev_field(),
            Action::Cancel => self.close_form(),
            Action::Submit => self.submit_form(),
            action if action.is_text_edit() => {
                apply_text_edit(self.form.focused_input_mut(), action)
            }
            _ => {}
        }
    }

    fn handle_dialog_action(&mut self, action: Action) {
        match action {
            Action::ConfirmYes => self.finish_delete(true),
            Action::ConfirmNo | Action::Cancel => self.finish_delete(false),
            Action::ConfirmToggle => self.confirm.toggle_selection(),
            Action::Submit => {
                let confirmed = self.confirm.is_confirm_selected();
                self.finish_delete(confirmed);
            }
            _ => {}
        }
    }

    fn close_form(&mut self) {
        self.form.close();
        self.input_mode = InputMode::Table;
    }

    fn submit_form(&mut self) {
        let Some(org) = self.form.submit() else {
            return;
        };

        let id = org.id.clone();
        let editing = matches!(self.form.mode, FormMode::Edit(_));
        let (result, done) = if editing {
            (self.store.update(org), "Запись сохранена")
        } else {
            (self.store.add(org), "Запись добавлена")
        };
        let saved = result.is_ok();
        self.report(result, done);
        // Keep the form open so the entered values can be retried
        if !saved {
            return;
        }

        self.close_form();
        self.view.refresh(&self.store);
        self.view.select_id(&id);
    }

    fn finish_delete(&mut self, confirmed: bool) {
        let context = self.confirm.hide();
        self.input_mode = InputMode::Table;

        if !confirmed {
            return;
        }
        if let Some(ConfirmationContext::DeleteRecord(id)) = context {
            let result = self.store.delete(&id);
            self.report(result, "Запись удалена");
            self.view.after_delete(&self.store);
        }
    }

    fn report(&mut self, result: Result<(), StoreError>, success: &str) {
        self.status = Some(match result {
            Ok(()) => StatusMessage::Info(success.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist records");
                StatusMessage::Error(format!("Не удалось сохранить: {e}"))
            }
        });
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(5),    // Table
                Constraint::Length(1), // Pager
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Footer
            ])
            .split(size);

        let buf = f.buffer_mut();

        SearchBar::new(&self.search_input)
            .focused(self.input_mode == InputMode::Search)
            .render(chunks[0], buf);

        let page = self.view.page();
        let params = self.view.params();
        OrgTable::new(&page.items)
            .sort(params.sort_field(), params.sort_dir())
            .selected(self.view.selected())
            .focused(self.input_mode == InputMode::Table)
            .render(chunks[1], buf);

        Pager::new(page.page, page.total_pages).render(chunks[2], buf);

        match &self.status {
            Some(StatusMessage::Error(msg)) => StatusLine::new().error(msg).render(chunks[3], buf),
            Some(StatusMessage::Info(msg)) => {
                StatusLine::new().success(msg).render(chunks[3], buf)
            }
            None => {}
        }

        GlobalFooter::from_input_mode(self.input_mode).render(chunks[4], buf);

        OrgFormDialog::new(&self.form).render(size, buf);
        ConfirmationDialog::new(&self.confirm).render(size, buf);
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    pub fn store(&self) -> &OrganizationStore {
        &self.store
    }

    pub fn form(&self) -> &OrgFormState {
        &self.form
    }

    pub fn confirm(&self) -> &ConfirmationDialogState {
        &self.confirm
    }

    pub fn search_input(&self) -> &TextInputState {
        &self.search_input
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn apply_text_edit(input: &mut TextInputState, action: Action) {
    match action {
        Action::Backspace => input.delete_char(),
        Action::Delete => input.delete_forward(),
        Action::DeleteWordBack => input.delete_word(),
        Action::DeleteToStart => input.delete_to_start(),
        Action::DeleteToEnd => input.delete_to_end(),
        Action::MoveCursorLeft => input.move_left(),
        Action::MoveCursorRight => input.move_right(),
        Action::MoveCursorStart => input.move_start(),
        Action::MoveCursorEnd => input.move_end(),
        Action::MoveWordLeft => input.move_word_left(),
        Action::MoveWordRight => input.move_word_right(),
        _ => {}
    }
}
