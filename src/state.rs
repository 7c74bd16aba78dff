use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::models::chat::ChatMessage;
use crate::models::quote::{
    market_status_at, now_ms, wib_now, BoardUpdate, MarketStatus, MarketSummary, Quote,
};
use crate::services::ihsg::IhsgService;
use crate::services::synthesizer::IHSG_BASE;

#[derive(Clone)]
pub struct AppState {
    quotes: Arc<RwLock<Vec<Quote>>>,
    summary: Arc<RwLock<MarketSummary>>,
    status: Arc<RwLock<MarketStatus>>,
    chat_log: Arc<RwLock<Vec<ChatMessage>>>,
    tx: broadcast::Sender<BoardUpdate>,
    ihsg: IhsgService,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_ihsg(IhsgService::new())
    }

    pub fn with_ihsg(ihsg: IhsgService) -> Self {
        // a lagging subscriber just drops some board ticks
        let (tx, _) = broadcast::channel(32);
        let ts = now_ms();
        Self {
            quotes: Arc::new(RwLock::new(seed_quotes(ts))),
            summary: Arc::new(RwLock::new(MarketSummary {
                index: IHSG_BASE,
                change_pct: 0.0,
                ts_ms: ts,
            })),
            status: Arc::new(RwLock::new(market_status_at(wib_now()))),
            chat_log: Arc::new(RwLock::new(Vec::new())),
            tx,
            ihsg,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardUpdate> {
        self.tx.subscribe()
    }

    pub fn ihsg(&self) -> &IhsgService {
        &self.ihsg
    }

    pub async fn quotes(&self) -> Vec<Quote> {
        self.quotes.read().await.clone()
    }

    /// Replace the board and broadcast every refreshed quote.
    pub async fn set_quotes(&self, quotes: Vec<Quote>) {
        *self.quotes.write().await = quotes.clone();
        for quote in quotes {
            // ignore lagging/no receivers
            let _ = self.tx.send(BoardUpdate::Quote(quote));
        }
    }

    pub async fn summary(&self) -> MarketSummary {
        self.summary.read().await.clone()
    }

    pub async fn set_summary(&self, summary: MarketSummary) {
        *self.summary.write().await = summary.clone();
        let _ = self.tx.send(BoardUpdate::Summary(summary));
    }

    pub async fn status(&self) -> MarketStatus {
        *self.status.read().await
    }

    pub async fn set_status(&self, status: MarketStatus) {
        *self.status.write().await = status;
    }

    /// Append to the chat log. The log grows without bound for the
    /// lifetime of the process; nothing trims or persists it.
    pub async fn push_chat(&self, message: ChatMessage) {
        self.chat_log.write().await.push(message);
    }

    pub async fn chat_history(&self) -> Vec<ChatMessage> {
        self.chat_log.read().await.clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_quotes(ts_ms: i64) -> Vec<Quote> {
    [
        ("BBRI", 4_580.0, 2.1),
        ("BMRI", 5_325.0, -0.8),
        ("TLKM", 3_150.0, 1.5),
        ("ASII", 6_875.0, 0.9),
    ]
    .into_iter()
    .map(|(code, price, change_pct)| Quote {
        code: code.to_string(),
        price,
        change_pct,
        ts_ms,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::ChatMessage;

    #[tokio::test]
    async fn board_is_seeded_with_the_top_stocks() {
        let state = AppState::new();
        let quotes = state.quotes().await;
        let codes: Vec<&str> = quotes.iter().map(|q| q.code.as_str()).collect();
        assert_eq!(codes, vec!["BBRI", "BMRI", "TLKM", "ASII"]);
        assert_eq!(state.summary().await.index, IHSG_BASE);
    }

    #[tokio::test]
    async fn set_quotes_broadcasts_each_update() {
        let state = AppState::new();
        let mut rx = state.subscribe();
        let mut quotes = state.quotes().await;
        quotes.truncate(2);
        state.set_quotes(quotes.clone()).await;

        for expected in quotes {
            match rx.recv().await.unwrap() {
                BoardUpdate::Quote(q) => assert_eq!(q, expected),
                other => panic!("unexpected update: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn chat_log_is_append_only_and_ordered() {
        let state = AppState::new();
        state.push_chat(ChatMessage::user("halo", 1)).await;
        state.push_chat(ChatMessage::assistant("hai", 2)).await;
        let log = state.chat_history().await;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].text, "halo");
        assert_eq!(log[1].text, "hai");
        assert!(log[0].ts_ms <= log[1].ts_ms);
    }
}
