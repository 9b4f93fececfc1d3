/// Destination for "copy" actions.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// The system clipboard, through FLTK.
#[derive(Debug, Default, Clone, Copy)]
pub struct FltkClipboard;

impl Clipboard for FltkClipboard {
    fn write_text(&mut self, text: &str) {
        fltk::app::copy(text);
    }
}
