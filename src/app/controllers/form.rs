use std::sync::Arc;

use crate::app::infrastructure::clipboard::Clipboard;
use crate::app::infrastructure::error::ShortenError;
use crate::app::services::shortener::Shortener;

pub const COPIED_MESSAGE: &str = "short url copied to clipboard";
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occured! Try again.";
pub const INVALID_URL_MESSAGE: &str = "Please enter a URL.";

/// Transient user-facing notifications ("toasts").
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No short URL yet
    Idle,
    /// A short URL is displayed
    Result,
}

/// A request handed out by `begin_submit`. The id ties the response back to
/// it; responses for anything but the latest ticket are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub id: u64,
    pub url: String,
}

/// Owns the form's transient state and implements submit / reset / copy.
///
/// Submitting is split in two so the caller can run the request wherever it
/// likes: `begin_submit` hands out a ticket, `finish_submit` applies the
/// outcome for it. `submit` does both on the current thread.
pub struct FormController<C: Clipboard, N: Notifier> {
    input: String,
    short_url: String,
    pending: bool,
    request_id: u64,
    shortener: Arc<dyn Shortener>,
    clipboard: C,
    notifier: N,
}

impl<C: Clipboard, N: Notifier> FormController<C, N> {
    pub fn new(shortener: Arc<dyn Shortener>, clipboard: C, notifier: N) -> Self {
        Self {
            input: String::new(),
            short_url: String::new(),
            pending: false,
            request_id: 0,
            shortener,
            clipboard,
            notifier,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    pub fn state(&self) -> FormState {
        if self.short_url.is_empty() {
            FormState::Idle
        } else {
            FormState::Result
        }
    }

    /// True while a request started by `begin_submit` has not finished
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn shortener(&self) -> Arc<dyn Shortener> {
        Arc::clone(&self.shortener)
    }

    /// Start a submission. Returns `None` and changes nothing when the input
    /// is blank or a request is already outstanding. Input that is not an
    /// absolute URL is rejected with one error notification.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        let url = self.input.trim();
        if url.is_empty() {
            return None;
        }
        if self.pending {
            tracing::debug!("submit ignored: request already in flight");
            return None;
        }
        if let Err(e) = url::Url::parse(url) {
            tracing::debug!(%url, "submit rejected: {}", e);
            self.notifier.error(INVALID_URL_MESSAGE);
            return None;
        }

        let url = url.to_string();
        self.pending = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.short_url.clear();
        tracing::debug!(%url, id = self.request_id, "submitting");
        Some(SubmitTicket {
            id: self.request_id,
            url,
        })
    }

    /// Apply the outcome of the request identified by `id`. Outcomes of
    /// superseded requests (e.g. one in flight during a reset) are ignored.
    pub fn finish_submit(&mut self, id: u64, result: Result<String, ShortenError>) {
        if !self.pending || id != self.request_id {
            tracing::debug!(id, "ignoring stale shorten response");
            return;
        }
        self.pending = false;

        let result = result.and_then(|short_url| {
            if short_url.trim().is_empty() {
                Err(ShortenError::Api("Response did not contain a short url".to_string()))
            } else {
                Ok(short_url)
            }
        });

        match result {
            Ok(short_url) => {
                tracing::info!(%short_url, "url shortened");
                self.short_url = short_url;
            }
            Err(e) => {
                tracing::warn!("shorten request failed: {}", e);
                let message = e.to_string();
                if message.trim().is_empty() {
                    self.notifier.error(FALLBACK_ERROR_MESSAGE);
                } else {
                    self.notifier.error(&message);
                }
            }
        }
    }

    /// Submit and wait for the response on the current thread.
    pub fn submit(&mut self) {
        if let Some(ticket) = self.begin_submit() {
            let result = self.shortener.shorten(&ticket.url);
            self.finish_submit(ticket.id, result);
        }
    }

    /// Back to Idle with an empty form. A request still in flight is abandoned.
    pub fn reset(&mut self) {
        self.short_url.clear();
        self.input.clear();
        self.pending = false;
        tracing::debug!("form reset");
    }

    /// Copy the short URL to the clipboard. Does nothing in Idle.
    pub fn copy_url(&mut self) {
        if self.state() != FormState::Result {
            return;
        }
        self.clipboard.write_text(&self.short_url);
        self.notifier.success(COPIED_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeShortener {
        response: Result<String, ShortenError>,
        calls: AtomicUsize,
        last_url: Mutex<Option<String>>,
    }

    impl FakeShortener {
        fn replying(response: Result<String, ShortenError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: AtomicUsize::new(0),
                last_url: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Shortener for FakeShortener {
        fn shorten(&self, url: &str) -> Result<String, ShortenError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_url.lock().unwrap() = Some(url.to_string());
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) {
            self.writes.push(text.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: Vec<String>,
        errors: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&mut self, message: &str) {
            self.successes.push(message.to_string());
        }

        fn error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    type TestController = FormController<RecordingClipboard, RecordingNotifier>;

    fn controller(shortener: Arc<FakeShortener>) -> TestController {
        FormController::new(shortener, RecordingClipboard::default(), RecordingNotifier::default())
    }

    fn ok(url: &str) -> Result<String, ShortenError> {
        Ok(url.to_string())
    }

    #[test]
    fn test_empty_submit_does_nothing() {
        let shortener = FakeShortener::replying(ok("https://s.test/x"));
        let mut form = controller(shortener.clone());

        form.submit();
        form.set_input("   ");
        form.submit();

        assert_eq!(shortener.calls(), 0);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.input(), "   ");
        assert!(form.notifier.errors.is_empty());
    }

    #[test]
    fn test_successful_submit_shows_result() {
        let shortener = FakeShortener::replying(ok("https://s.test/abc"));
        let mut form = controller(shortener.clone());

        form.set_input("  https://www.rust-lang.org/  ");
        form.submit();

        assert_eq!(form.state(), FormState::Result);
        assert_eq!(form.short_url(), "https://s.test/abc");
        assert_eq!(shortener.calls(), 1);
        assert_eq!(
            shortener.last_url.lock().unwrap().as_deref(),
            Some("https://www.rust-lang.org/")
        );
        assert!(!form.is_pending());
        assert!(form.notifier.errors.is_empty());
    }

    #[test]
    fn test_failed_submit_stays_idle_with_one_error() {
        let shortener = FakeShortener::replying(Err(ShortenError::Api(
            "Request failed with status code 429".to_string(),
        )));
        let mut form = controller(shortener);

        form.set_input("https://example.com");
        form.submit();

        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.short_url(), "");
        assert_eq!(form.notifier.errors, vec!["Request failed with status code 429"]);
        assert!(form.notifier.successes.is_empty());
    }

    #[test]
    fn test_error_without_message_uses_fallback() {
        let shortener = FakeShortener::replying(Err(ShortenError::Api(String::new())));
        let mut form = controller(shortener);

        form.set_input("https://example.com");
        form.submit();

        assert_eq!(form.notifier.errors, vec![FALLBACK_ERROR_MESSAGE]);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut form = controller(FakeShortener::replying(ok("https://s.test/abc")));
        form.set_input("https://example.com");
        form.submit();
        assert_eq!(form.state(), FormState::Result);

        form.reset();

        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.input(), "");
        assert_eq!(form.short_url(), "");
    }

    #[test]
    fn test_copy_in_result_state() {
        let mut form = controller(FakeShortener::replying(ok("https://s.test/abc")));
        form.set_input("https://example.com");
        form.submit();

        form.copy_url();

        assert_eq!(form.clipboard.writes, vec!["https://s.test/abc"]);
        assert_eq!(form.notifier.successes, vec![COPIED_MESSAGE]);
        assert_eq!(form.state(), FormState::Result);
    }

    #[test]
    fn test_copy_in_idle_is_noop() {
        let mut form = controller(FakeShortener::replying(ok("https://s.test/abc")));
        form.copy_url();
        assert!(form.clipboard.writes.is_empty());
        assert!(form.notifier.successes.is_empty());
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut form = controller(FakeShortener::replying(ok("https://s.test/abc")));
        form.set_input("https://example.com");

        let ticket = form.begin_submit().unwrap();
        assert_eq!(ticket.url, "https://example.com");
        assert!(form.is_pending());
        assert_eq!(form.begin_submit(), None);

        form.finish_submit(ticket.id, ok("https://s.test/first"));
        assert!(!form.is_pending());
        assert_eq!(form.short_url(), "https://s.test/first");
    }

    #[test]
    fn test_new_submission_clears_previous_result() {
        let mut form = controller(FakeShortener::replying(ok("https://s.test/abc")));
        form.set_input("https://example.com");
        form.submit();

        form.set_input("https://example.org");
        let ticket = form.begin_submit().unwrap();
        assert_eq!(form.state(), FormState::Idle);

        form.finish_submit(ticket.id, Err(ShortenError::Network("timed out".to_string())));
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.notifier.errors, vec!["Network error: timed out"]);
    }

    #[test]
    fn test_non_url_input_is_rejected_without_request() {
        let shortener = FakeShortener::replying(ok("https://s.test/abc"));
        let mut form = controller(shortener.clone());

        form.set_input("hello world");
        form.submit();

        assert_eq!(shortener.calls(), 0);
        assert_eq!(form.state(), FormState::Idle);
        assert!(!form.is_pending());
        assert_eq!(form.notifier.errors, vec![INVALID_URL_MESSAGE]);
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let shortener = FakeShortener::replying(ok("https://s.test/abc"));
        let mut form = controller(shortener.clone());

        form.set_input("www.rust-lang.org/learn");
        assert_eq!(form.begin_submit(), None);
        assert_eq!(shortener.calls(), 0);
        assert_eq!(form.notifier.errors.len(), 1);
    }

    #[test]
    fn test_empty_short_url_counts_as_failure() {
        let mut form = controller(FakeShortener::replying(ok("  ")));

        form.set_input("https://example.com");
        form.submit();

        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.notifier.errors, vec!["Response did not contain a short url"]);
    }

    #[test]
    fn test_reset_abandons_request_in_flight() {
        let mut form = controller(FakeShortener::replying(ok("https://s.test/abc")));
        form.set_input("https://example.com");
        let stale = form.begin_submit().unwrap();

        form.reset();
        assert!(!form.is_pending());

        form.finish_submit(stale.id, ok("https://s.test/late"));
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.input(), "");
        assert!(form.notifier.errors.is_empty());
    }

    #[test]
    fn test_stale_response_does_not_override_newer_request() {
        let mut form = controller(FakeShortener::replying(ok("https://s.test/abc")));
        form.set_input("https://example.com");
        let stale = form.begin_submit().unwrap();
        form.reset();

        form.set_input("https://example.org");
        let current = form.begin_submit().unwrap();
        assert_ne!(stale.id, current.id);

        form.finish_submit(stale.id, ok("https://s.test/late"));
        assert!(form.is_pending());
        assert_eq!(form.state(), FormState::Idle);

        form.finish_submit(current.id, ok("https://s.test/current"));
        assert_eq!(form.short_url(), "https://s.test/current");
    }
}
