use crate::{
    filter::{self, FilterOptions, FilterState, Selection},
    opentelemetry::trace_turn,
    transcript::Transcript,
    AssistantError, CatalogViewParams,
};
use catalog_sdk::{CatalogApi, CatalogError, CatalogItem, ChatRequest, Message};
use futures::lock::Mutex;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, warn};

/// What happened to a submitted chat turn.
#[derive(Debug)]
pub enum TurnOutcome {
    /// Blank input. Nothing was appended or sent.
    Ignored,
    /// The assistant answered and the filter was reconciled with its directive.
    Answered { text: String, filter: FilterState },
    /// The assistant could not be reached. The fallback message was appended
    /// and the filter was left as it was.
    Failed(CatalogError),
    /// The view was re-entered before the turn completed. Its reply, if one
    /// was requested at all, was dropped.
    Discarded,
}

/// Everything a renderer needs, taken under a single lock.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub visible: Vec<CatalogItem>,
    pub filter: FilterState,
    pub options: FilterOptions,
    pub messages: Vec<Message>,
    pub pending_turns: usize,
}

struct ViewState {
    items: Vec<CatalogItem>,
    filter: FilterState,
    transcript: Transcript,
    /// Bumped on re-entry. Replies to turns from an older epoch are dropped.
    epoch: u64,
    /// Turns of the current epoch still waiting for the assistant.
    pending_turns: usize,
}

struct PendingTurn {
    epoch: u64,
    request: ChatRequest,
    outcome_tx: oneshot::Sender<TurnOutcome>,
}

/// The catalog view: item list, filter state and the assistant conversation.
///
/// Chat turns are processed one at a time by a background task in the order
/// they were submitted, so replies are applied in request order. Each request
/// carries the history as it was when the turn was submitted.
pub struct CatalogView {
    api: Arc<dyn CatalogApi>,
    state: Arc<Mutex<ViewState>>,
    turns: mpsc::UnboundedSender<PendingTurn>,
    greeting: String,
}

impl CatalogView {
    /// Open the view and start its turn worker.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    #[must_use]
    pub fn new(params: CatalogViewParams) -> Self {
        let CatalogViewParams {
            api,
            items,
            greeting,
            fallback_text,
        } = params;

        let state = Arc::new(Mutex::new(ViewState {
            items,
            filter: FilterState::default(),
            transcript: Transcript::seeded(greeting.clone()),
            epoch: 0,
            pending_turns: 0,
        }));

        let (turns, turn_rx) = mpsc::unbounded_channel();
        tokio::spawn(process_turns(
            api.clone(),
            state.clone(),
            turn_rx,
            fallback_text,
        ));

        Self {
            api,
            state,
            turns,
            greeting,
        }
    }

    pub fn builder(api: Arc<dyn CatalogApi>) -> CatalogViewParams {
        CatalogViewParams::new(api)
    }

    /// Fetch the university listing and replace the current items with it.
    /// A failure is logged and leaves the items as they were. Returns whether
    /// the listing was loaded.
    pub async fn load_items(&self) -> bool {
        match self.api.list_universities().await {
            Ok(items) => {
                debug!(count = items.len(), "loaded university listing");
                self.state.lock().await.items = items;
                true
            }
            Err(err) => {
                error!(error = %err, "failed to fetch universities");
                false
            }
        }
    }

    /// Replace the items with a listing fetched elsewhere.
    pub async fn set_items(&self, items: Vec<CatalogItem>) {
        self.state.lock().await.items = items;
    }

    /// Submit a user message and wait for the turn to complete.
    ///
    /// The user message is appended right away. Turns submitted while others
    /// are in flight queue behind them.
    pub async fn send(&self, text: &str) -> Result<TurnOutcome, AssistantError> {
        let (outcome_tx, outcome_rx) = oneshot::channel();

        {
            let mut state = self.state.lock().await;
            if self.turns.is_closed() {
                return Err(AssistantError::Closed);
            }
            let Some(history) = state.transcript.append_user_turn(text) else {
                return Ok(TurnOutcome::Ignored);
            };
            let turn = PendingTurn {
                epoch: state.epoch,
                request: ChatRequest {
                    message: text.to_string(),
                    history,
                },
                outcome_tx,
            };
            self.turns
                .send(turn)
                .map_err(|_| AssistantError::Closed)?;
            state.pending_turns += 1;
        }

        outcome_rx.await.map_err(|_| AssistantError::Closed)
    }

    /// Drop any city, tag or highlight narrowing.
    pub async fn reset_filters(&self) {
        let mut state = self.state.lock().await;
        state.filter = filter::reconcile(&state.filter, None);
    }

    pub async fn select_city(&self, city: impl Into<Selection>) {
        let mut state = self.state.lock().await;
        state.filter = std::mem::take(&mut state.filter).with_city(city);
    }

    pub async fn select_tag(&self, tag: impl Into<Selection>) {
        let mut state = self.state.lock().await;
        state.filter = std::mem::take(&mut state.filter).with_tag(tag);
    }

    /// Start over as if the view was entered for the first time: the
    /// transcript holds only the greeting and the filter is reset. Turns
    /// submitted before this call are discarded; those still queued are never
    /// sent. The items stay.
    pub async fn reenter(&self) {
        let mut state = self.state.lock().await;
        state.epoch += 1;
        state.pending_turns = 0;
        state.filter = FilterState::default();
        state.transcript = Transcript::seeded(self.greeting.clone());
    }

    pub async fn filter_state(&self) -> FilterState {
        self.state.lock().await.filter.clone()
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.state.lock().await.transcript.messages().to_vec()
    }

    pub async fn transcript(&self) -> Transcript {
        self.state.lock().await.transcript.clone()
    }

    pub async fn items(&self) -> Vec<CatalogItem> {
        self.state.lock().await.items.clone()
    }

    pub async fn visible_items(&self) -> Vec<CatalogItem> {
        let state = self.state.lock().await;
        filter::visible_items(&state.items, &state.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// How many items the current filter lets through.
    pub async fn match_count(&self) -> usize {
        let state = self.state.lock().await;
        filter::visible_items(&state.items, &state.filter).len()
    }

    pub async fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_items(&self.state.lock().await.items)
    }

    /// Turns submitted since the last re-entry that have no reply yet.
    pub async fn pending_turns(&self) -> usize {
        self.state.lock().await.pending_turns
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        let state = self.state.lock().await;
        ViewSnapshot {
            visible: filter::visible_items(&state.items, &state.filter)
                .into_iter()
                .cloned()
                .collect(),
            filter: state.filter.clone(),
            options: FilterOptions::from_items(&state.items),
            messages: state.transcript.messages().to_vec(),
            pending_turns: state.pending_turns,
        }
    }
}

async fn process_turns(
    api: Arc<dyn CatalogApi>,
    state: Arc<Mutex<ViewState>>,
    mut turn_rx: mpsc::UnboundedReceiver<PendingTurn>,
    fallback_text: String,
) {
    while let Some(turn) = turn_rx.recv().await {
        let PendingTurn {
            epoch,
            request,
            outcome_tx,
        } = turn;
        let outcome = run_turn(api.as_ref(), &state, epoch, request, &fallback_text).await;
        if outcome_tx.send(outcome).is_err() {
            debug!("turn completed after its caller stopped waiting");
        }
    }
    debug!("chat turn queue closed");
}

async fn run_turn(
    api: &dyn CatalogApi,
    state: &Mutex<ViewState>,
    epoch: u64,
    request: ChatRequest,
    fallback_text: &str,
) -> TurnOutcome {
    let stale = state.lock().await.epoch != epoch;
    if stale {
        debug!(epoch, "skipping turn from a previous visit");
        return TurnOutcome::Discarded;
    }

    let result = trace_turn(request.history.len(), api.chat(request)).await;

    let mut state = state.lock().await;
    if state.epoch != epoch {
        debug!(epoch, current = state.epoch, "dropping reply from a previous visit");
        return TurnOutcome::Discarded;
    }
    state.pending_turns = state.pending_turns.saturating_sub(1);

    match result {
        Ok(reply) => {
            state.transcript.append_assistant_turn(reply.text.clone());
            let next = filter::reconcile(&state.filter, reply.action.as_ref());
            if reply.action.is_none() {
                debug!("reply carried no directive, resetting filters");
            }
            state.filter = next.clone();
            TurnOutcome::Answered {
                text: reply.text,
                filter: next,
            }
        }
        Err(err) => {
            warn!(error = %err, "chat turn failed");
            state.transcript.append_assistant_turn(fallback_text);
            TurnOutcome::Failed(err)
        }
    }
}
