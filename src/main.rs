// Custom Tab Bar
// Terminal demo host for the animated underline tab bar widget

// IMPORTS ------------------>>

use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Instant;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use custom_tab_bar::render::{render_bindings, render_content, render_status_bar, render_title};
use custom_tab_bar::{load_and_validate_config, App, AppSettings, EventHandler, FileLogger};

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = AppSettings::default();
    FileLogger::install(&settings.ui.log_file, settings.ui.log_level)?;

    // Load and validate configuration from YAML file
    let app_config = load_and_validate_config(None)?;
    let mut app = App::new(&app_config, settings)?;
    log::info!("starting with tab bar '{}'", app_config.application.tab_bar);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if app.settings.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    log::info!("exiting");
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        let animating = app.tick(Instant::now());
        terminal.draw(|f| draw(f, app))?;

        // Short waits only while the underline is moving
        if event::poll(app.poll_timeout(animating))? {
            let app_event = EventHandler::handle(event::read()?);
            app.handle_event(app_event);
        }
    }
    Ok(())
}

fn draw(f: &mut Frame, app: &mut App) {
    let [title_area, main_area, status_area, bindings_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_title(f, title_area, &app.title);

    // Content keeps clear of the docked tab bar
    let (content_area, tab_bar_area) = app.split_tab_bar(main_area);
    render_content(f, content_area, app);
    app.tab_bar_mut().render(f, tab_bar_area);

    render_status_bar(f, status_area, &app.status_text, app.last_error.as_deref());
    render_bindings(f, bindings_area, &app.bindings);
}
