use std::time::Duration;

use crate::chat::store::is_sendable;
use crate::chat::timer::{BrowserTimer, Timer, TimerHandle};
use crate::chat::MessageSink;
use crate::config::Config;
use crate::types::Sender;

/// Answers every user message with a canned reply after a fixed delay.
///
/// Each send starts its own timer; nothing is debounced, so replies land in the
/// order their timers fire. Timers still in flight are cancelled when the
/// scheduler is dropped along with the chat that owns it.
pub struct ReplyScheduler<T: Timer = BrowserTimer> {
    timer: T,
    delay: Duration,
    reply_text: String,
    pending: Vec<TimerHandle>,
}

impl<T: Timer> ReplyScheduler<T> {
    pub fn new(timer: T, config: &Config) -> Self {
        Self {
            timer,
            delay: config.reply_delay(),
            reply_text: config.reply_text.clone(),
            pending: Vec::new(),
        }
    }

    /// Appends `text` as a user message and schedules the reply.
    /// Blank text is dropped without scheduling anything.
    pub fn submit<S: MessageSink>(&mut self, text: &str, sink: &S) -> bool {
        if !is_sendable(text) {
            tracing::trace!("ignoring blank message");
            return false;
        }
        sink.push(text.to_string(), Sender::User);
        let sink = sink.clone();
        self.schedule(move |reply| sink.push(reply, Sender::Bot));
        true
    }

    pub fn schedule<F>(&mut self, deliver: F)
    where
        F: FnOnce(String) + 'static,
    {
        self.pending.retain(TimerHandle::is_pending);
        let reply = self.reply_text.clone();
        let handle = self.timer.schedule_once(
            self.delay,
            Box::new(move || {
                tracing::debug!("delivering scheduled reply");
                deliver(reply);
            }),
        );
        self.pending.push(handle);
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            in_flight = self.pending.len(),
            "reply scheduled"
        );
    }

    pub fn in_flight(&self) -> usize {
        self.pending.iter().filter(|h| h.is_pending()).count()
    }

    /// Cancels every reply that has not fired yet and returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for handle in self.pending.drain(..) {
            if handle.is_pending() {
                handle.cancel();
                cancelled += 1;
            }
        }
        if cancelled > 0 {
            tracing::debug!(cancelled, "cancelled pending replies");
        }
        cancelled
    }
}

impl<T: Timer> Drop for ReplyScheduler<T> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
