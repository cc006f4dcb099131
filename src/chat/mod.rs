//! Chat log with a simulated assistant.
//!
//! A user message is appended immediately; the assistant answers once after
//! a fixed delay. Only one reply can be outstanding, and a reply that fires
//! after the session was shut down is dropped.

mod reply;

pub use reply::reply_to;

use crate::config::SessionConfig;
use crate::models::{Message, MessageId, Role};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct ChatLog {
    messages: Vec<Message>,
    /// Mirrored into the watch channel while this lock is held
    pending: bool,
    /// Bumped on every scheduled reply and on shutdown
    generation: u64,
    /// Next message sequence number, used for id uniqueness
    seq: u64,
    closed: bool,
}

/// Ordered message log plus the single pending-reply slot
pub struct ChatSession {
    log: Arc<Mutex<ChatLog>>,
    pending_tx: Arc<watch::Sender<bool>>,
    config: SessionConfig,
    reply_task: Option<JoinHandle<()>>,
}

fn lock(log: &Mutex<ChatLog>) -> MutexGuard<'_, ChatLog> {
    log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ChatSession {
    /// Start a session seeded with an existing conversation
    pub fn new(seed: Vec<Message>, config: SessionConfig) -> Self {
        let (pending_tx, _) = watch::channel(false);
        let log = ChatLog {
            messages: seed,
            ..ChatLog::default()
        };

        Self {
            log: Arc::new(Mutex::new(log)),
            pending_tx: Arc::new(pending_tx),
            config,
            reply_task: None,
        }
    }

    /// Append a user message and schedule the assistant reply.
    ///
    /// Returns `None` without touching the log when the trimmed text is
    /// empty, a reply is already pending, or the session is shut down.
    /// Must be called from within a Tokio runtime.
    pub fn append_user_message(&mut self, content: &str) -> Option<MessageId> {
        let content = content.trim();
        if content.is_empty() {
            debug!("Ignoring empty message");
            return None;
        }

        let (id, generation) = {
            let mut log = lock(&self.log);
            if log.closed {
                debug!("Ignoring message on closed session");
                return None;
            }
            if log.pending {
                debug!("Ignoring message while a reply is pending");
                return None;
            }

            log.seq += 1;
            let message = Message::new(Role::User, content, log.seq);
            let id = message.id.clone();
            log.messages.push(message);
            log.pending = true;
            log.generation += 1;
            self.pending_tx.send_replace(true);
            (id, log.generation)
        };

        info!("💬 User message {} appended, reply scheduled", id);
        self.schedule_reply(content.to_string(), generation);

        Some(id)
    }

    fn schedule_reply(&mut self, prompt: String, generation: u64) {
        let log = Arc::clone(&self.log);
        let pending_tx = Arc::clone(&self.pending_tx);
        let delay = self.config.reply_delay();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let id = {
                let mut log = lock(&log);
                if log.closed || log.generation != generation {
                    debug!("Dropping stale reply for generation {}", generation);
                    return;
                }

                log.seq += 1;
                let message = Message::new(Role::Assistant, reply_to(&prompt), log.seq);
                let id = message.id.clone();
                log.messages.push(message);
                log.pending = false;
                pending_tx.send_replace(false);
                id
            };

            info!("🤖 Assistant reply {} delivered", id);
        });

        // The previous task has already finished: a new reply is only scheduled when none is pending.
        self.reply_task = Some(handle);
    }

    pub fn is_reply_pending(&self) -> bool {
        lock(&self.log).pending
    }

    /// Snapshot of the log in chronological order
    pub fn messages(&self) -> Vec<Message> {
        lock(&self.log).messages.clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.log).messages.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.log).messages.is_empty()
    }

    /// Resolve once no reply is pending
    pub async fn wait_for_reply(&self) {
        let mut rx = self.pending_tx.subscribe();
        let _ = rx.wait_for(|pending| !*pending).await;
    }

    /// Tear the session down. A reply still in flight never lands.
    pub fn shutdown(&mut self) {
        {
            let mut log = lock(&self.log);
            if log.closed {
                return;
            }
            log.closed = true;
            log.generation += 1;
            if log.pending {
                info!("Cancelling pending assistant reply");
            }
            log.pending = false;
            self.pending_tx.send_replace(false);
        }
        if let Some(handle) = self.reply_task.take() {
            handle.abort();
        }
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{sleep, Instant};

    fn session() -> ChatSession {
        ChatSession::new(Vec::new(), SessionConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_is_ignored() {
        let mut chat = session();

        for text in ["", "   ", "\n\t "] {
            assert!(chat.append_user_message(text).is_none());
        }
        assert!(chat.is_empty());
        assert!(!chat.is_reply_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay() {
        let mut chat = session();
        let start = Instant::now();

        chat.append_user_message("  3 bedrooms near a park ").unwrap();
        assert_eq!(chat.len(), 1);
        assert!(chat.is_reply_pending());
        assert_eq!(chat.messages()[0].content, "3 bedrooms near a park");

        sleep(Duration::from_millis(1400)).await;
        assert_eq!(chat.len(), 1);
        assert!(chat.is_reply_pending());

        chat.wait_for_reply().await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(!chat.is_reply_pending());

        let messages = chat.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(messages[1].content.contains("\"3 bedrooms near a park\""));
    }

    #[tokio::test(start_paused = true)]
    async fn second_submission_while_pending_is_rejected() {
        let mut chat = session();

        assert!(chat.append_user_message("first").is_some());
        assert!(chat.append_user_message("second").is_none());
        assert_eq!(chat.len(), 1);

        chat.wait_for_reply().await;
        assert_eq!(chat.len(), 2);

        assert!(chat.append_user_message("third").is_some());
        chat.wait_for_reply().await;
        assert_eq!(chat.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_pending_reply() {
        let mut chat = session();
        chat.append_user_message("hello").unwrap();
        let log = Arc::clone(&chat.log);

        chat.shutdown();
        assert!(!chat.is_reply_pending());

        sleep(Duration::from_millis(3000)).await;
        assert_eq!(lock(&log).messages.len(), 1);
        assert!(chat.append_user_message("again").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_session_does_not_leave_reply_behind() {
        let mut chat = session();
        chat.append_user_message("hello").unwrap();
        let log = Arc::clone(&chat.log);

        drop(chat);
        sleep(Duration::from_millis(3000)).await;

        let log = lock(&log);
        assert!(log.closed);
        assert_eq!(log.messages.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn resubmitting_as_soon_as_reply_lands_keeps_flags_in_sync() {
        let mut chat = ChatSession::new(Vec::new(), SessionConfig { reply_delay_ms: 0 });

        for round in 0..500 {
            chat.append_user_message(&format!("question {}", round)).unwrap();
            while chat.is_reply_pending() {
                tokio::task::yield_now().await;
            }
            // Flag just cleared: submit again straight away, then wait on the channel
            chat.append_user_message(&format!("follow-up {}", round)).unwrap();
            chat.wait_for_reply().await;

            assert!(!chat.is_reply_pending(), "round {}", round);
            assert_eq!(chat.messages().last().unwrap().role, Role::Assistant);
        }
        assert_eq!(chat.len(), 2000);
    }

    #[tokio::test(start_paused = true)]
    async fn seed_messages_are_preserved() {
        let seed = vec![Message::new(Role::Assistant, "Welcome", 0)];
        let mut chat = ChatSession::new(seed, SessionConfig::default());

        chat.append_user_message("hi").unwrap();
        chat.wait_for_reply().await;

        let contents: Vec<_> = chat.messages().into_iter().map(|m| m.content).collect();
        assert_eq!(contents[0], "Welcome");
        assert_eq!(contents[1], "hi");
        assert_eq!(contents.len(), 3);
    }
}
