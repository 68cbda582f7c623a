//! Outbound display-update delivery.
//!
//! The controller never touches a rendering toolkit; it hands every
//! [`DisplayUpdate`] to a [`DisplaySink`] and the host decides how to show it.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::types::DisplayUpdate;

/// Receiver of display updates emitted by the controller.
pub trait DisplaySink {
    /// Delivers one update. Must not block.
    fn publish(&mut self, update: DisplayUpdate);
}

/// Forwards updates to a renderer task.
///
/// A dropped receiver is not an error: the update is discarded.
impl DisplaySink for mpsc::UnboundedSender<DisplayUpdate> {
    fn publish(&mut self, update: DisplayUpdate) {
        if self.send(update).is_err() {
            tracing::debug!("display receiver closed, update discarded");
        }
    }
}

impl DisplaySink for Vec<DisplayUpdate> {
    fn publish(&mut self, update: DisplayUpdate) {
        self.push(update);
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn publish(&mut self, update: DisplayUpdate) {
        (**self).publish(update);
    }
}

// ============================================================================
// MockDisplaySink
// ============================================================================

/// Recording sink for tests. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MockDisplaySink {
    updates: Arc<Mutex<Vec<DisplayUpdate>>>,
}

impl MockDisplaySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every update recorded so far.
    #[must_use]
    pub fn updates(&self) -> Vec<DisplayUpdate> {
        self.updates.lock().unwrap().clone()
    }

    /// Returns the most recent update.
    #[must_use]
    pub fn last(&self) -> Option<DisplayUpdate> {
        self.updates.lock().unwrap().last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.updates.lock().unwrap().clear();
    }
}

impl DisplaySink for MockDisplaySink {
    fn publish(&mut self, update: DisplayUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UpdateEvent;

    fn sample() -> DisplayUpdate {
        DisplayUpdate::stopped(UpdateEvent::Skipped, 100.0, None)
    }

    #[test]
    fn test_channel_sink_delivers() {
        let (mut tx, mut rx) = mpsc::unbounded_channel();
        tx.publish(sample());
        assert_eq!(rx.try_recv().unwrap(), sample());
    }

    #[test]
    fn test_channel_sink_ignores_closed_receiver() {
        let (mut tx, rx) = mpsc::unbounded_channel::<DisplayUpdate>();
        drop(rx);
        tx.publish(sample());
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<DisplayUpdate> = Vec::new();
        sink.publish(sample());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_boxed_sink() {
        let mock = MockDisplaySink::new();
        let mut boxed: Box<dyn DisplaySink> = Box::new(mock.clone());
        boxed.publish(sample());
        assert_eq!(mock.len(), 1);
    }

    #[test]
    fn test_mock_shares_buffer_between_clones() {
        let mock = MockDisplaySink::new();
        let mut writer = mock.clone();
        writer.publish(sample());
        writer.publish(sample());

        assert_eq!(mock.len(), 2);
        assert_eq!(mock.last(), Some(sample()));

        mock.clear();
        assert!(writer.is_empty());
    }
}
