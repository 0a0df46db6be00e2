use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::store::ConversationStore;
use super::types::{Message, ResponseMeta};
use crate::actions::QuickAction;
use crate::responder;

/// Artificial latency before an assistant reply is appended. Emulates
/// "thinking"; there is no real computation behind it.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Outcome of a [`ChatController::send`] call.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// The turn completed: user message and assistant reply, in append order.
    Replied { user: Message, assistant: Message },
    /// Trimmed input was empty; nothing was appended.
    Empty,
    /// A reply was already in flight; the send was rejected and nothing was
    /// appended. Callers retry once the controller is idle again.
    Busy,
}

/// Drives a conversation: appends the user message, waits the artificial
/// response delay, then computes and appends the assistant reply.
///
/// State machine per turn: Idle → Responding → Idle. At most one reply is in
/// flight at a time; sends during the Responding window return
/// [`SendOutcome::Busy`]. Once a reply is scheduled it always completes and
/// appends — there is no cancellation path, even if the caller stops waiting.
pub struct ChatController {
    store: Arc<ConversationStore>,
    rng: Arc<Mutex<StdRng>>,
    responding: Arc<AtomicBool>,
    response_delay: Duration,
}

impl ChatController {
    /// Controller with an OS-seeded RNG and the default response delay.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Controller with a fixed seed; replies and metadata become
    /// deterministic.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Controller honoring the configured delay, seed, and welcome policy.
    /// Every surface (shell, gateway) builds its controller through here.
    pub fn from_config(config: &crate::config::ChatConfig) -> Self {
        let controller = match config.rng_seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
        .with_response_delay(Duration::from_millis(config.response_delay_ms));

        if config.welcome {
            controller.with_welcome()
        } else {
            controller
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            store: Arc::new(ConversationStore::new()),
            rng: Arc::new(Mutex::new(rng)),
            responding: Arc::new(AtomicBool::new(false)),
            response_delay: DEFAULT_RESPONSE_DELAY,
        }
    }

    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    /// Seed the opening assistant message. A presentation concern: the engine
    /// itself never appends an assistant message without a triggering user
    /// message, so surfaces that want the greeting opt in here.
    pub fn with_welcome(self) -> Self {
        self.store.append(Message::assistant(
            responder::WELCOME.to_owned(),
            None,
            None,
        ));
        self
    }

    /// Send a user message and wait for the assistant reply.
    ///
    /// Empty (after trimming) input is ignored. If a reply is already in
    /// flight the send is rejected — the policy choice mirroring a chat UI
    /// that disables its send control while a reply is pending.
    pub async fn send(&self, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Empty;
        }
        if self.responding.swap(true, Ordering::SeqCst) {
            debug!("send rejected: reply already in flight");
            return SendOutcome::Busy;
        }

        let user = Message::user(text);
        self.store.append(user.clone());

        // The reply runs on its own task so that, once scheduled, it always
        // completes and appends — even if this caller stops waiting.
        let store = Arc::clone(&self.store);
        let rng = Arc::clone(&self.rng);
        let responding = Arc::clone(&self.responding);
        let delay = self.response_delay;
        let input = text.to_owned();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let (reply, meta) = {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                let reply = responder::select(&input, &mut *rng);
                let meta = ResponseMeta::random(&mut *rng);
                (reply, meta)
            };
            let assistant = Message::assistant(reply.text, Some(reply.kind), Some(meta));
            store.append(assistant.clone());
            responding.store(false, Ordering::SeqCst);
            assistant
        });

        let assistant = handle.await.expect("response task panicked");
        SendOutcome::Replied { user, assistant }
    }

    /// Send a quick action — identical to sending its prompt text.
    pub async fn send_quick_action(&self, action: &QuickAction) -> SendOutcome {
        self.send(action.prompt).await
    }

    /// Whether a reply is currently in flight.
    pub fn is_responding(&self) -> bool {
        self.responding.load(Ordering::SeqCst)
    }

    /// Snapshot of the conversation so far.
    pub fn history(&self) -> Vec<Message> {
        self.store.snapshot()
    }

    /// Access the underlying store.
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }
}
