//! In-memory doubles for the watcher tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::AppResult;
use crate::external::SalarySource;
use crate::models::{Company, SalaryEntry, WebhookMessage};
use crate::services::notifications::{NotificationProvider, NotificationResult};

pub(crate) fn entry(id: i64) -> SalaryEntry {
    SalaryEntry {
        id,
        role_title: "Software Engineer".to_string(),
        role_focus: "Backend".to_string(),
        grade: "L5".to_string(),
        annual_compensation: 12_500_000,
        annual_salary: 9_000_000,
        annual_bonus: 1_500_000,
        annual_stock: 2_000_000,
        signing_bonus_total: 0,
        years_of_experience: 8,
        years_at_company: 2,
        company: Company {
            name: "Mercari".to_string(),
            slug: "mercari".to_string(),
        },
    }
}

pub(crate) fn entries(ids: &[i64]) -> Vec<SalaryEntry> {
    ids.iter().copied().map(entry).collect()
}

/// Replays queued responses, then keeps answering with an empty page
#[derive(Default)]
pub(crate) struct ScriptedSource {
    script: Mutex<VecDeque<AppResult<Vec<SalaryEntry>>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn new(script: Vec<AppResult<Vec<SalaryEntry>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SalarySource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_entries(&self) -> AppResult<Vec<SalaryEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Records every message; fails the deliveries whose index is listed
#[derive(Default)]
pub(crate) struct RecordingProvider {
    sent: Mutex<Vec<WebhookMessage>>,
    fail_on: Vec<usize>,
}

impl RecordingProvider {
    pub(crate) fn failing_on(fail_on: Vec<usize>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on,
        }
    }

    pub(crate) fn sent(&self) -> Vec<WebhookMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationProvider for RecordingProvider {
    async fn send(&self, message: &WebhookMessage) -> AppResult<NotificationResult> {
        let mut sent = self.sent.lock().unwrap();
        let index = sent.len();
        sent.push(message.clone());

        let success = !self.fail_on.contains(&index);
        Ok(NotificationResult {
            success,
            status_code: Some(if success { 204 } else { 500 }),
            response: None,
            duration_ms: 0,
        })
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
