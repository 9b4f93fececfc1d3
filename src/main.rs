use std::sync::Arc;

use fltk::app;

use ferris_link::app::infrastructure::logging::init_logging;
use ferris_link::app::state::AppState;
use ferris_link::app::{ApiConfig, Message, RapidApiShortener, Shortener, ThemeStore};
use ferris_link::ui::main_window::build_main_window;
use ferris_link::ui::menu::build_menu;

fn main() {
    init_logging();

    let config = ApiConfig::from_env();
    let theme = ThemeStore::open_default();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, theme.get().is_dark());

    let shortener: Arc<dyn Shortener> = Arc::new(RapidApiShortener::new(config));
    let mut state = AppState::new(widgets, sender, shortener, theme);
    state.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::Quit => break,
                other => state.handle(other),
            }
        }
    }

    tracing::debug!("event loop finished");
}
