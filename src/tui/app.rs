//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;

use super::home::HomeView;
use super::styles::Theme;
use crate::api::TaskApi;
use crate::prefs::KeyValueStore;
use crate::screen::TaskScreen;

pub struct App<A, S> {
    home: HomeView<A, S>,
    should_quit: bool,
}

impl<A: TaskApi, S: KeyValueStore> App<A, S> {
    pub fn new(screen: TaskScreen<A, S>, show_ids: bool) -> Self {
        Self {
            home: HomeView::new(screen, show_ids),
            should_quit: false,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        // Theme and task list; the screen stays static until both resolve
        self.home.mount().await;
        terminal.draw(|f| self.render(f))?;

        loop {
            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await;
                        terminal.draw(|f| self.render(f))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|f| self.render(f))?;
                    }
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let theme = Theme::for_mode(self.home.dark_mode());
        self.home.render(frame, frame.area(), &theme);
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        // Global keybindings
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('q'), _) if !self.home.has_dialog() && !self.home.is_typing() => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if let Some(action) = self.home.handle_key(key).await {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}
