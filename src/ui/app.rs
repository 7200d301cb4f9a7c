//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::QueryEvent;
use crate::query::{QueryScheduler, Subscription};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const SPLASH_DURATION: Duration = Duration::from_secs(2);

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard page fed by the query pollers.
    Dashboard,
}

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Refresh,
    SkipSplash,
    None,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state, fed from the first event even while the splash shows.
    dashboard: DashboardState,

    /// Receives query results from pollers.
    event_receiver: mpsc::Receiver<QueryEvent>,

    /// Owns the pollers; shut down on exit.
    scheduler: QueryScheduler,

    /// Mounted queries. Dropping them unmounts the dashboard.
    _subscriptions: Vec<Subscription>,
}

impl App {
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<QueryEvent>,
        scheduler: QueryScheduler,
        subscriptions: Vec<Subscription>,
        with_background_color: bool,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(environment, Instant::now(), with_background_color),
            event_receiver,
            scheduler,
            _subscriptions: subscriptions,
        }
    }

    pub fn screen(&self) -> Screen {
        self.current_screen
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Queue all results received since the last tick.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
        self.dashboard.update();
    }

    /// Leaves the splash once the overview is in, or after `SPLASH_DURATION`.
    pub fn advance_splash(&mut self, elapsed: Duration) {
        if self.current_screen == Screen::Splash
            && (elapsed >= SPLASH_DURATION || self.dashboard.store.overview().is_some())
        {
            self.current_screen = Screen::Dashboard;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> KeyAction {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            self.scheduler.shutdown();
            return KeyAction::Quit;
        }
        match self.current_screen {
            Screen::Splash => {
                // Any key press will skip the splash screen
                self.current_screen = Screen::Dashboard;
                KeyAction::SkipSplash
            }
            Screen::Dashboard => {
                if matches!(code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.scheduler.invalidate_all();
                    KeyAction::Refresh
                } else {
                    KeyAction::None
                }
            }
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        app.drain_events();
        app.advance_splash(splash_start.elapsed());
        terminal.draw(|f| render(f, &app))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) == KeyAction::Quit {
                    return Ok(());
                }
            }
        }

        // Let pollers make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.dashboard),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::UserScore;
    use crate::query::{Payload, QueryKey, QueryOptions};
    use futures::FutureExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn app_with_poller() -> (App, Arc<AtomicUsize>) {
        let (tx, rx) = mpsc::channel(16);
        let scheduler = QueryScheduler::new(tx);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let subscription = scheduler.subscribe(
            QueryOptions::for_key(QueryKey::UserScore).with_refresh_interval(None),
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok(Payload::UserScore(UserScore::default())) }.boxed()
            }),
        );
        let app = App::new(Environment::Local, rx, scheduler, vec![subscription], false);
        (app, calls)
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn any_key_skips_splash_then_r_refreshes() {
        let (mut app, calls) = app_with_poller();
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(app.handle_key(KeyCode::Enter), KeyAction::SkipSplash);
        assert_eq!(app.screen(), Screen::Dashboard);

        assert_eq!(app.handle_key(KeyCode::Char('r')), KeyAction::Refresh);
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn events_are_applied_while_splash_shows() {
        let (mut app, _) = app_with_poller();
        settle().await;
        app.drain_events();

        assert_eq!(app.screen(), Screen::Splash);
        assert!(app.dashboard().store.user_score().is_some());
    }

    #[tokio::test]
    async fn splash_ends_when_overview_resolves() {
        let (mut app, _) = app_with_poller();
        settle().await;
        app.drain_events();
        app.advance_splash(Duration::from_millis(100));
        assert_eq!(app.screen(), Screen::Splash);

        app.dashboard
            .add_event(QueryEvent::resolved(Payload::Overview(Default::default())));
        app.drain_events();
        app.advance_splash(Duration::from_millis(200));
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[tokio::test]
    async fn splash_times_out() {
        let (mut app, _) = app_with_poller();
        app.advance_splash(SPLASH_DURATION);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[tokio::test]
    async fn quit_shuts_down_pollers() {
        let (mut app, _) = app_with_poller();
        assert_eq!(app.handle_key(KeyCode::Char('q')), KeyAction::Quit);
        settle().await;
        assert!(!app.scheduler.is_polling(QueryKey::UserScore));
    }
}
