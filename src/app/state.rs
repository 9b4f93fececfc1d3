use std::sync::Arc;

use fltk::{app::Sender, prelude::*};

use super::controllers::form::{FormController, FormState};
use super::domain::Message;
use super::infrastructure::clipboard::FltkClipboard;
use super::infrastructure::error::ShortenError;
use super::services::shortener::Shortener;
use super::services::theme_store::ThemeStore;
use crate::ui::main_window::{MainWidgets, ROW_HEIGHT};
use crate::ui::menu::DARK_MODE_ITEM;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;
use crate::ui::toast::Toast;

pub struct AppState {
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub form: FormController<FltkClipboard, Toast>,
    pub theme: ThemeStore,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        shortener: Arc<dyn Shortener>,
        theme: ThemeStore,
    ) -> Self {
        let toast = Toast::new(
            widgets.toast_frame.clone(),
            widgets.flex.clone(),
            widgets.wind.clone(),
        );
        let form = FormController::new(shortener, FltkClipboard, toast);

        Self {
            widgets,
            sender,
            form,
            theme,
        }
    }

    /// Paint the persisted theme, show the window and focus the input.
    pub fn show(&mut self) {
        apply_theme(&mut self.widgets, self.theme.get());
        self.widgets.wind.show();
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, self.theme.get().is_dark());
        let _ = self.widgets.url_input.take_focus();
        self.sync_widgets();
    }

    /// Dispatch one message from the FLTK channel. `Quit` is handled by the loop in main.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::InputChanged(value) => self.form.set_input(value),
            Message::Submit => self.submit(),
            Message::Reset => self.reset(),
            Message::CopyUrl => self.form.copy_url(),
            Message::ToggleDarkMode => self.toggle_dark_mode(),
            Message::ShortenFinished(id, result) => self.finish_submit(id, result),
            Message::Quit => {}
        }
    }

    // --- Form ---

    pub fn submit(&mut self) {
        self.form.set_input(self.widgets.url_input.value());
        let Some(ticket) = self.form.begin_submit() else {
            return;
        };
        self.sync_widgets();

        let shortener = self.form.shortener();
        let sender = self.sender;
        std::thread::spawn(move || {
            let result = shortener.shorten(&ticket.url);
            sender.send(Message::ShortenFinished(ticket.id, result));
        });
    }

    pub fn finish_submit(&mut self, id: u64, result: Result<String, ShortenError>) {
        self.form.finish_submit(id, result);
        self.sync_widgets();
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.sync_widgets();
        let _ = self.widgets.url_input.take_focus();
    }

    // --- View ---

    pub fn toggle_dark_mode(&mut self) {
        let mode = self.theme.toggle();
        apply_theme(&mut self.widgets, mode);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, mode.is_dark());
        self.update_menu_checkbox(DARK_MODE_ITEM, mode.is_dark());
    }

    /// Push controller state into the widgets.
    fn sync_widgets(&mut self) {
        let w = &mut self.widgets;

        if w.url_input.value() != self.form.input() {
            w.url_input.set_value(self.form.input());
        }

        if self.form.is_pending() {
            w.shorten_button.deactivate();
        } else {
            w.shorten_button.activate();
        }

        match self.form.state() {
            FormState::Result => {
                w.short_url_output.set_value(self.form.short_url());
                w.result_row.show();
                w.flex.fixed(&w.result_row, ROW_HEIGHT);
            }
            FormState::Idle => {
                w.short_url_output.set_value("");
                w.result_row.hide();
                w.flex.fixed(&w.result_row, 0);
            }
        }

        w.wind.redraw();
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.widgets.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.widgets.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}
