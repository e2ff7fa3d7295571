use crate::order::{OrderExtractor, OrderLine};
use std::fmt::Write as _;

/// Spoken back when an utterance matches nothing on the menu
pub const NOT_FOUND_MESSAGE: &str = "Sorry, I couldn't find that item on our menu.";

/// Delivers messages to the customer (speech, console, ...)
#[cfg_attr(test, mockall::automock)]
pub trait Announcer: Send + Sync {
    /// Announce a message
    fn announce(&self, message: &str);
}

/// Announcer that prints to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    #[allow(clippy::print_stdout)]
    fn announce(&self, message: &str) {
        tracing::debug!(message = message, "announcing");
        println!("{message}");
    }
}

/// Build the confirmation for matched lines, e.g. `Added 2 Chicken Tacos to your cart!`
///
/// Returns [`NOT_FOUND_MESSAGE`] when `lines` is empty.
#[must_use]
pub fn confirmation_message(lines: &[OrderLine<'_>]) -> String {
    if lines.is_empty() {
        return NOT_FOUND_MESSAGE.to_owned();
    }

    let mut message = String::from("Added ");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            message.push_str(", ");
        }
        let _ = write!(message, "{} {}", line.quantity, line.item.name);
    }
    message.push_str(" to your cart!");
    message
}

/// Voice ordering session: extracts orders and announces the outcome
pub struct OrderSession<A: Announcer> {
    extractor: OrderExtractor,
    announcer: A,
}

impl<A: Announcer> OrderSession<A> {
    /// Creates a session from an extractor and an announcer
    pub const fn new(extractor: OrderExtractor, announcer: A) -> Self {
        Self {
            extractor,
            announcer,
        }
    }

    /// Extractor used by the session
    pub const fn extractor(&self) -> &OrderExtractor {
        &self.extractor
    }

    /// Handle one finalized utterance
    ///
    /// Announces a confirmation or the not-found message and returns the
    /// extracted lines. The caller owns any cart state.
    pub fn handle_utterance(&self, utterance: &str) -> Vec<OrderLine<'_>> {
        let lines = self.extractor.extract_order(utterance);
        self.announcer.announce(&confirmation_message(&lines));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Catalog;
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn extractor() -> OrderExtractor {
        OrderExtractor::new(Arc::new(Catalog::builtin().unwrap())).unwrap()
    }

    #[test]
    fn test_confirmation_single_item() {
        let extractor = extractor();
        let lines = extractor.extract_order("two chicken tacos");
        assert_eq!(
            confirmation_message(&lines),
            "Added 2 Chicken Tacos to your cart!"
        );
    }

    #[test]
    fn test_confirmation_multiple_items() {
        let extractor = extractor();
        let lines = extractor.extract_order("classic burger and fish & chips");
        assert_eq!(
            confirmation_message(&lines),
            "Added 1 Classic Burger, 1 Fish & Chips to your cart!"
        );
    }

    #[test]
    fn test_confirmation_empty() {
        assert_eq!(confirmation_message(&[]), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_session_announces_confirmation() {
        let mut announcer = MockAnnouncer::new();
        announcer
            .expect_announce()
            .with(eq("Added 3 Loaded Nachos to your cart!"))
            .times(1)
            .return_const(());

        let session = OrderSession::new(extractor(), announcer);
        let lines = session.handle_utterance("three loaded nachos");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.name, "Loaded Nachos");
    }

    #[test]
    fn test_session_announces_not_found() {
        let mut announcer = MockAnnouncer::new();
        announcer
            .expect_announce()
            .with(eq(NOT_FOUND_MESSAGE))
            .times(1)
            .return_const(());

        let session = OrderSession::new(extractor(), announcer);
        assert!(session.handle_utterance("surprise me").is_empty());
    }
}
