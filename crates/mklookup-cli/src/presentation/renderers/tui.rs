//! Interactive terminal UI.
//!
//! The renderer owns the controller and the terminal. Each loop iteration
//! ticks the controller, draws the screen, handles at most one terminal
//! event and then drains request completions posted by worker threads.

use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use mklookup_engine::{LookupController, UiEvent, Viewport};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::input::{map_key, map_mouse};
use super::layout::ScreenLayout;
use crate::presentation::views::tui::ScreenView;
use crate::tasks::TaskRunner;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct TuiRenderer {
    controller: LookupController,
    runner: TaskRunner,
    rx: Receiver<UiEvent>,
    mouse: bool,
    /// Geometry of the last drawn frame, used for mouse hit-testing.
    layout: ScreenLayout,
}

impl TuiRenderer {
    pub fn new(
        controller: LookupController,
        runner: TaskRunner,
        rx: Receiver<UiEvent>,
        mouse: bool,
    ) -> Self {
        Self {
            controller,
            runner,
            rx,
            mouse,
            layout: ScreenLayout::default(),
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal if the process is interrupted from outside
        let mouse = self.mouse;
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            if mouse {
                let _ = execute!(io::stdout(), DisableMouseCapture);
            }
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(130);
        })?;

        info!("terminal UI started (mouse: {})", self.mouse);
        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        if self.mouse {
            execute!(terminal.backend_mut(), DisableMouseCapture)?;
        }
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("terminal UI stopped");

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            let now = Instant::now();
            self.dispatch(UiEvent::Tick, now);

            let state = self.controller.state();
            let mut layout = ScreenLayout::default();
            terminal.draw(|f| {
                layout = ScreenLayout::compute(f.area(), state);
                f.render_widget(ScreenView::new(state, &layout, now), f.area());
            })?;
            self.update_layout(layout);

            // Handle events with timeout (allows toast expiry and redraws)
            if event::poll(POLL_INTERVAL)? {
                self.handle_terminal_event(event::read()?);
            }

            // Apply request completions (non-blocking)
            while let Ok(completion) = self.rx.try_recv() {
                self.dispatch(completion, Instant::now());
            }

            if self.controller.state().should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(ui_event) = map_key(key, self.controller.state()) {
                    self.dispatch(ui_event, Instant::now());
                }
            }
            Event::Mouse(mouse) if self.mouse => {
                let events = map_mouse(mouse, &self.layout, self.controller.state());
                for ui_event in events {
                    self.dispatch(ui_event, Instant::now());
                }
            }
            Event::Paste(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    self.dispatch(UiEvent::InputChar(c), Instant::now());
                }
            }
            _ => {}
        }
    }

    /// Reports the details panel geometry to the controller when it moved.
    fn update_layout(&mut self, layout: ScreenLayout) {
        let viewport = Viewport::new(layout.details.y, layout.details.height);
        if self.controller.state().details_viewport != viewport {
            debug!("details panel at y={} h={}", viewport.top, viewport.height);
            self.dispatch(UiEvent::DetailsLaidOut(viewport), Instant::now());
        }
        self.layout = layout;
    }

    fn dispatch(&mut self, event: UiEvent, now: Instant) {
        for command in self.controller.handle(event, now) {
            self.runner.execute(command);
        }
    }
}
