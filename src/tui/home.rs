//! Home view - the task list screen

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::app::Action;
use super::components::{render_text_field, HelpOverlay};
use super::dialogs::{ConfirmDialog, DialogResult};
use super::styles::Theme;
use crate::api::{Task, TaskApi, TaskId};
use crate::filter::Filter;
use crate::prefs::KeyValueStore;
use crate::screen::{Outcome, TaskScreen};

const INPUT_PLACEHOLDER: &str = "Add a new task...";

pub struct HomeView<A, S> {
    screen: TaskScreen<A, S>,

    // UI state
    input: Input,
    input_focused: bool,
    cursor: usize,
    show_ids: bool,

    // Dialogs
    show_help: bool,
    confirm_dialog: Option<ConfirmDialog>,
    pending_delete: Option<TaskId>,
}

impl<A: TaskApi, S: KeyValueStore> HomeView<A, S> {
    pub fn new(screen: TaskScreen<A, S>, show_ids: bool) -> Self {
        Self {
            screen,
            input: Input::default(),
            input_focused: false,
            cursor: 0,
            show_ids,
            show_help: false,
            confirm_dialog: None,
            pending_delete: None,
        }
    }

    pub async fn mount(&mut self) {
        self.screen.mount().await;
        self.clamp_cursor();
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help || self.confirm_dialog.is_some()
    }

    /// True while keystrokes go to the input field.
    pub fn is_typing(&self) -> bool {
        self.input_focused
    }

    pub fn dark_mode(&self) -> bool {
        self.screen.dark_mode()
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                    self.pending_delete = None;
                }
                DialogResult::Submit(()) => {
                    self.confirm_dialog = None;
                    if let Some(id) = self.pending_delete.take() {
                        self.screen.delete_task(&id).await;
                        self.clamp_cursor();
                    }
                }
            }
            return None;
        }

        if self.input_focused {
            self.handle_input_key(key).await;
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => {
                self.input_focused = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.screen.visible_tasks().len().saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Char('c') => {
                if let Some(id) = self.selected_id() {
                    self.screen.toggle_completed(&id).await;
                    self.clamp_cursor();
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    if self.screen.begin_edit(&id) {
                        self.sync_input();
                        self.input_focused = true;
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(task) = self.selected_task() {
                    let message = format!("Delete task '{}'?", task.title);
                    self.pending_delete = Some(task.id.clone());
                    self.confirm_dialog = Some(ConfirmDialog::new("Delete Task", &message));
                }
            }
            KeyCode::Char('f') | KeyCode::Tab => {
                self.set_filter(self.screen.filter().next());
            }
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Completed),
            KeyCode::Char('3') => self.set_filter(Filter::Pending),
            KeyCode::Char('t') => self.screen.toggle_theme().await,
            KeyCode::Char('r') | KeyCode::F(5) => {
                self.screen.refresh().await;
                self.clamp_cursor();
            }
            _ => {}
        }

        None
    }

    async fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_focused = false;
                if self.screen.is_editing() {
                    self.screen.cancel_edit();
                    self.sync_input();
                }
            }
            KeyCode::Enter => {
                let was_editing = self.screen.is_editing();
                self.screen.set_input(self.input.value());
                let outcome = self.screen.submit().await;
                self.sync_input();
                if outcome == Outcome::Applied {
                    if was_editing {
                        self.input_focused = false;
                    } else {
                        // Follow the new task, which is appended last
                        self.cursor = self.screen.visible_tasks().len().saturating_sub(1);
                    }
                }
                self.clamp_cursor();
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
                self.screen.set_input(self.input.value());
            }
        }
    }

    fn set_filter(&mut self, filter: Filter) {
        self.screen.set_filter(filter);
        self.clamp_cursor();
    }

    fn sync_input(&mut self) {
        self.input = Input::new(self.screen.input().to_string());
    }
}

impl<A, S> HomeView<A, S> {
    pub fn screen(&self) -> &TaskScreen<A, S> {
        &self.screen
    }

    fn selected_task(&self) -> Option<&Task> {
        self.screen.visible_tasks().get(self.cursor).copied()
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.screen.visible_tasks().len();
        if len == 0 {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.cursor + delta as usize).min(len - 1)
        };
    }

    fn clamp_cursor(&mut self) {
        let len = self.screen.visible_tasks().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(3), // input
                Constraint::Length(1), // filters
                Constraint::Min(0),    // list
                Constraint::Length(1), // status bar
            ])
            .split(area);

        self.render_header(frame, chunks[0], theme);
        self.render_input(frame, chunks[1], theme);
        self.render_filters(frame, chunks[2], theme);
        self.render_list(frame, chunks[3], theme);
        self.render_status_bar(frame, chunks[4], theme);

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mode_hint = if self.screen.dark_mode() {
            "t: Switch to Light Mode ☀ "
        } else {
            "t: Switch to Dark Mode ☾ "
        };

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(26)])
            .split(area);

        let title = Paragraph::new(" ✔ Todo-List")
            .style(Style::default().fg(theme.title).bold());
        frame.render_widget(title, halves[0]);

        let hint = Paragraph::new(mode_hint)
            .style(Style::default().fg(theme.hint))
            .alignment(Alignment::Right);
        frame.render_widget(hint, halves[1]);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let (label, border) = if self.screen.is_editing() {
            (" Update Task ", theme.accent)
        } else if self.input_focused {
            (" Add Task ", theme.accent)
        } else {
            (" Add Task ", theme.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(label)
            .title_style(Style::default().fg(theme.title));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_text_field(
            frame,
            inner,
            &self.input,
            self.input_focused,
            INPUT_PLACEHOLDER,
            theme,
        );
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![Span::raw(" ")];
        for filter in Filter::ALL {
            let style = if filter == self.screen.filter() {
                Style::default().fg(theme.accent).bold().underlined()
            } else {
                Style::default().fg(theme.dimmed)
            };
            spans.push(Span::styled(filter.label(), style));
            spans.push(Span::raw("   "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let visible = self.screen.visible_tasks();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(
                " Tasks ({}/{}) ",
                visible.len(),
                self.screen.tasks().len()
            ))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if visible.is_empty() {
            let empty = Paragraph::new("No tasks listed.")
                .style(Style::default().fg(theme.dimmed))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let items: Vec<ListItem> = visible
            .iter()
            .map(|task| self.render_item(task, theme))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.selection))
            .highlight_symbol("› ");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn render_item<'a>(&self, task: &'a Task, theme: &Theme) -> ListItem<'a> {
        let editing = self.screen.edit_id() == Some(&task.id);

        let (check, title_style) = if task.completed {
            ("[x] ", Style::default().fg(theme.done).crossed_out())
        } else {
            ("[ ] ", Style::default().fg(theme.pending))
        };
        let title_style = if editing {
            title_style.italic()
        } else {
            title_style
        };

        let mut spans = vec![Span::styled(check, Style::default().fg(theme.accent))];
        if self.show_ids {
            spans.push(Span::styled(
                format!("#{} ", task.id),
                Style::default().fg(theme.dimmed),
            ));
        }
        spans.push(Span::styled(task.title.as_str(), title_style));
        if editing {
            spans.push(Span::styled("  (editing)", Style::default().fg(theme.hint)));
        }

        ListItem::new(Line::from(spans))
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(error) = self.screen.last_error() {
            let status = Paragraph::new(format!(" {}", error))
                .style(Style::default().fg(theme.error).bg(theme.selection));
            frame.render_widget(status, area);
            return;
        }

        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let keys: &[(&str, &str)] = if self.input_focused {
            &[("Enter", "Save"), ("Esc", "Done")]
        } else {
            &[
                ("a", "Add"),
                ("Space", "Done"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("f", "Filter"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        };

        let mut spans = Vec::new();
        for (i, (key, desc)) in keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", sep_style));
            }
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
