// Application State
// Main application state management and lifecycle

use anyhow::{Context, Result};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tab_bar_components::{
    create_tab_bar_from_config, StylingUpdate, TabBar, TabBarManager, TabBarPresentable,
    TabSelected,
};

use super::{AppEvent, AppSettings};
use crate::config::{AppConfig, BindingConfigYaml};

/// Most recent selection events, newest last
type SelectionLog = Rc<RefCell<VecDeque<TabSelected>>>;

/// Main application state
pub struct App {
    /// Application settings (built-in defaults)
    pub settings: AppSettings,

    /// Title shown in the header
    pub title: String,

    /// Key bindings shown in the footer
    pub bindings: Vec<BindingConfigYaml>,

    /// Status line text when nothing went wrong
    pub status_text: String,

    /// Last error reported by the tab bar, shown in place of the status text
    pub last_error: Option<String>,

    /// The tab bar and its keyboard navigation
    manager: TabBarManager,

    /// Selection events received through the tab bar delegate
    selections: SelectionLog,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &AppConfig, settings: AppSettings) -> Result<Self> {
        let tab_bar_config = config.tab_bar_config()?;
        let tab_bar = create_tab_bar_from_config(tab_bar_config)
            .with_context(|| format!("Failed to create tab bar '{}'", config.application.tab_bar))?;

        let mut manager = TabBarManager::new(tab_bar);
        let selections: SelectionLog = Rc::new(RefCell::new(VecDeque::new()));
        let capacity = settings.ui.event_log_capacity.max(1);
        let sink = Rc::clone(&selections);
        manager.tab_bar_mut().set_delegate(move |event: &TabSelected| {
            let mut log = sink.borrow_mut();
            if log.len() == capacity {
                log.pop_front();
            }
            log.push_back(event.clone());
        });

        Ok(Self {
            settings,
            title: config.application.title.clone(),
            bindings: config.application.bindings.clone(),
            status_text: config.application.status_bar.default_text.clone(),
            last_error: None,
            manager,
            selections,
            should_quit: false,
        })
    }

    pub fn tab_bar_mut(&mut self) -> &mut TabBar {
        self.manager.tab_bar_mut()
    }

    /// Selection events, oldest first
    pub fn recent_selections(&self) -> Vec<TabSelected> {
        self.selections.borrow().iter().cloned().collect()
    }

    /// Apply one application event
    pub fn handle_event(&mut self, event: AppEvent) {
        let result = match event {
            AppEvent::Quit => {
                self.quit();
                Ok(())
            }
            AppEvent::NavigatePrevious => self.manager.navigate_previous().map(drop),
            AppEvent::NavigateNext => self.manager.navigate_next().map(drop),
            AppEvent::Activate(number) => self.manager.set_active(number.saturating_sub(1)).map(drop),
            AppEvent::ToggleUnderline => {
                let position = self.manager.tab_bar().styling().underline_position.toggled();
                self.tab_bar_mut()
                    .update(&StylingUpdate::new().with_underline_position(position));
                Ok(())
            }
            AppEvent::CycleBackground => {
                let mode = self.manager.tab_bar().styling().background.cycled();
                self.tab_bar_mut().update(&StylingUpdate::new().with_background(mode));
                Ok(())
            }
            AppEvent::Mouse(mouse) if self.settings.ui.mouse_enabled => {
                self.tab_bar_mut().handle_mouse(mouse).map(drop)
            }
            AppEvent::Mouse(_) | AppEvent::Resize | AppEvent::None => Ok(()),
        };

        match result {
            Ok(()) if event != AppEvent::None => self.last_error = None,
            Ok(()) => {}
            Err(e) => {
                log::warn!("{e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Advance animations; true while another frame is needed soon
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tab_bar_mut().tick(now)
    }

    /// How long to wait for input before the next frame
    pub fn poll_timeout(&self, animating: bool) -> Duration {
        if animating {
            self.settings.ui.tick_rate
        } else {
            self.settings.ui.idle_poll
        }
    }

    /// Split `area` into the content region and the docked tab bar
    pub fn split_tab_bar(&self, area: Rect) -> (Rect, Rect) {
        let content = self.content_area(area);
        let bar = Rect {
            y: content.bottom(),
            height: area.height - content.height,
            ..area
        };
        (content, bar)
    }

    /// Mark the application for exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl TabBarPresentable for App {
    fn tab_bar(&self) -> &TabBar {
        self.manager.tab_bar()
    }
}
