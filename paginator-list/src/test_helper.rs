//! Fetchers shared by the list tests.

use async_trait::async_trait;
use paginator_core::{AsyncRangeFetcher, FetchError, RangeFetcher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Items of the eleven-item collection used across tests, three per page:
/// `10 11 12 | 20 21 22 | 30 31 32 | 40 41`
pub const ELEVEN: [u32; 11] = [10, 11, 12, 20, 21, 22, 30, 31, 32, 40, 41];

/// Fetcher that records every `(index, count)` it is called with
pub struct RecordingFetcher {
    items: Vec<u32>,
    calls: Mutex<Vec<(usize, usize)>>,
    failures: AtomicUsize,
    fail: bool,
}

impl RecordingFetcher {
    pub fn new(items: &[u32]) -> Self {
        Self {
            items: items.to_vec(),
            calls: Mutex::new(Vec::new()),
            failures: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(&[])
        }
    }

    pub fn calls(&self) -> Vec<(usize, usize)> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }

    fn fetch(&self, index: usize, count: usize) -> Result<Vec<u32>, FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((index, count));
        }
        if self.fail {
            self.failures.fetch_add(1, Ordering::SeqCst);
            return Err("backing store unavailable".into());
        }
        let end = (index + count).min(self.items.len());
        Ok(self.items[index.min(end)..end].to_vec())
    }
}

impl RangeFetcher<u32> for RecordingFetcher {
    fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<u32>, FetchError> {
        self.fetch(index, count)
    }
}

#[async_trait]
impl AsyncRangeFetcher<u32> for RecordingFetcher {
    async fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<u32>, FetchError> {
        tokio::task::yield_now().await;
        self.fetch(index, count)
    }
}
