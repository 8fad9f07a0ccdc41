//! Deferred-formatting message bodies

use std::fmt;

/// Log text whose rendering can be postponed until emission.
///
/// A `Message` is either already-rendered text or a deferred formatting
/// closure evaluated exactly once when the message is written. Backends that
/// filter a message out, or discard it, never pay the formatting cost.
///
/// The formatting macros in [`crate::macros`] construct the deferred form;
/// plain text converts with `From`:
///
/// ```
/// use log_relay::Message;
///
/// let eager: Message = "ready".into();
/// let lazy = Message::lazy(|| format!("retry {} of {}", 1, 3));
/// assert_eq!(eager.into_string(), "ready");
/// assert_eq!(lazy.into_string(), "retry 1 of 3");
/// ```
pub struct Message(Repr);

enum Repr {
    Text(String),
    Lazy(Box<dyn FnOnce() -> String + Send>),
}

impl Message {
    /// Defer rendering to `render`, run at emission time.
    pub fn lazy(render: impl FnOnce() -> String + Send + 'static) -> Self {
        Message(Repr::Lazy(Box::new(render)))
    }

    /// Return a message that renders as `prefix` followed by this message.
    ///
    /// An empty prefix is the identity. Deferred bodies stay deferred.
    #[must_use]
    pub fn prefixed(self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self;
        }
        match self.0 {
            Repr::Text(text) => Message(Repr::Text(format!("{}{}", prefix, text))),
            Repr::Lazy(render) => {
                let prefix = prefix.to_string();
                Message::lazy(move || format!("{}{}", prefix, render()))
            }
        }
    }

    /// Render the message, consuming it.
    pub fn into_string(self) -> String {
        match self.0 {
            Repr::Text(text) => text,
            Repr::Lazy(render) => render(),
        }
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message(Repr::Text(text))
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message(Repr::Text(text.to_string()))
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Text(text) => f.debug_tuple("Message").field(text).finish(),
            Repr::Lazy(_) => f.debug_tuple("Message").field(&"<deferred>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_eager_text() {
        let m: Message = "hello".into();
        assert_eq!(m.into_string(), "hello");
    }

    #[test]
    fn test_lazy_runs_once_at_resolution() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let m = Message::lazy(move || {
            flag.store(true, Ordering::SeqCst);
            format!("value {}", 7)
        });
        assert!(!ran.load(Ordering::SeqCst));
        assert_eq!(m.into_string(), "value 7");
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_dropped_lazy_never_renders() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let m = Message::lazy(move || {
            flag.store(true, Ordering::SeqCst);
            String::new()
        });
        drop(m);
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_prefixed() {
        let m = Message::from("body").prefixed("pfx: ");
        assert_eq!(m.into_string(), "pfx: body");

        let m = Message::lazy(|| format!("n={}", 2)).prefixed("w1: ");
        assert_eq!(m.into_string(), "w1: n=2");
    }

    #[test]
    fn test_empty_prefix_is_identity() {
        let m = Message::from("body").prefixed("");
        assert_eq!(m.into_string(), "body");
    }

    #[test]
    fn test_prefixes_compose_outer_first() {
        let m = Message::from("body").prefixed("inner: ").prefixed("outer: ");
        assert_eq!(m.into_string(), "outer: inner: body");
    }
}
