use crate::app::infrastructure::error::ShortenError;

/// All messages that can be sent through the FLTK channel.
/// Widget and menu callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    InputChanged(String),
    Submit,
    Reset,
    CopyUrl,

    // View
    ToggleDarkMode,

    // Window
    Quit,

    // Worker thread
    /// Request id from `SubmitTicket` and the service's answer
    ShortenFinished(u64, Result<String, ShortenError>),
}
