use std::cell::Cell;
use std::rc::Rc;

use fltk::{app, enums::Color, frame::Frame, group::Flex, prelude::*, window::Window};

use crate::app::controllers::form::Notifier;
use super::main_window::TOAST_HEIGHT;

const TOAST_SECONDS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Success,
    Error,
}

/// A strip above the form that shows one message and hides itself.
///
/// A newer toast replaces an older one; the older one's timer then does
/// nothing.
pub struct Toast {
    frame: Frame,
    flex: Flex,
    window: Window,
    generation: Rc<Cell<u64>>,
}

impl Toast {
    pub fn new(frame: Frame, flex: Flex, window: Window) -> Self {
        Self {
            frame,
            flex,
            window,
            generation: Rc::new(Cell::new(0)),
        }
    }

    fn show(&mut self, message: &str, kind: ToastKind) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let (background, prefix) = match kind {
            ToastKind::Success => (Color::from_rgb(22, 163, 74), "\u{2714}"),
            ToastKind::Error => (Color::from_rgb(220, 38, 38), "\u{2716}"),
        };
        self.frame.set_label(&format!("  {}  {}", prefix, label_text(message)));
        self.frame.set_color(background);
        self.frame.set_label_color(Color::White);
        self.frame.show();
        self.flex.fixed(&self.frame, TOAST_HEIGHT);
        self.window.redraw();

        let mut frame = self.frame.clone();
        let mut flex = self.flex.clone();
        let mut window = self.window.clone();
        let current = Rc::clone(&self.generation);
        app::add_timeout3(TOAST_SECONDS, move |_| {
            if current.get() == generation {
                frame.hide();
                flex.fixed(&frame, 0);
                window.redraw();
            }
        });
    }
}

impl Notifier for Toast {
    fn success(&mut self, message: &str) {
        self.show(message, ToastKind::Success);
    }

    fn error(&mut self, message: &str) {
        self.show(message, ToastKind::Error);
    }
}

/// FLTK treats `@` in labels as a symbol escape; double it to print it.
fn label_text(message: &str) -> String {
    message.replace('@', "@@")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text_escapes_at_sign() {
        assert_eq!(label_text("user@host refused"), "user@@host refused");
    }

    #[test]
    fn test_label_text_plain() {
        assert_eq!(label_text("short url copied to clipboard"), "short url copied to clipboard");
    }
}
