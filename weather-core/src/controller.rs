//! Query controller: the only writer of the search text and [`RequestStatus`].
//!
//! A submission is split in two so callers running an event loop can keep it
//! responsive: [`QueryController::begin`] performs the transition to
//! `Loading` and hands back a [`Submission`] whose future does the network
//! work; [`QueryController::settle`] applies the result. Each submission gets
//! a [`Ticket`] and only the most recently issued one may settle, so a slow
//! response can never overwrite a newer one.

use std::sync::Arc;

use crate::{FetchError, Query, RequestStatus, WeatherProvider, WeatherRecord};

/// Monotonically increasing sequence number attached to each submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// An issued fetch that has not run yet.
#[derive(Debug)]
pub struct Submission {
    ticket: Ticket,
    query: Query,
    provider: Arc<dyn WeatherProvider>,
}

impl Submission {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Perform the fetch. Does not touch controller state.
    pub async fn run(self) -> Completion {
        let outcome = self.provider.current(&self.query).await;
        Completion { ticket: self.ticket, outcome }
    }
}

/// A settled fetch waiting to be applied.
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Result<WeatherRecord, FetchError>,
}

#[derive(Debug)]
pub struct QueryController {
    provider: Arc<dyn WeatherProvider>,
    query: String,
    status: RequestStatus,
    last_issued: u64,
}

impl QueryController {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider, query: String::new(), status: RequestStatus::Idle, last_issued: 0 }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// Replace the search text verbatim.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Enter `Loading` and issue a new submission, or do nothing for a blank query.
    pub fn begin(&mut self) -> Option<Submission> {
        let query = Query::parse(&self.query)?;

        self.last_issued += 1;
        let ticket = Ticket(self.last_issued);
        self.status = RequestStatus::Loading;

        tracing::info!(query = %query, ticket = ticket.0, "submitting weather query");

        Some(Submission { ticket, query, provider: Arc::clone(&self.provider) })
    }

    /// Apply a completion. Returns `false` when it was stale and got discarded.
    pub fn settle(&mut self, completion: Completion) -> bool {
        let Completion { ticket, outcome } = completion;

        if ticket.0 != self.last_issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.last_issued,
                "discarding stale weather response"
            );
            return false;
        }

        self.status = match outcome {
            Ok(record) => RequestStatus::Success(record),
            Err(err) => {
                tracing::warn!(error = %err, "weather query failed");
                RequestStatus::Failed(err.user_message())
            }
        };

        true
    }

    /// Begin, run and settle in one go. Returns `false` if nothing was submitted.
    pub async fn submit(&mut self) -> bool {
        let Some(submission) = self.begin() else {
            return false;
        };

        let completion = submission.run().await;
        self.settle(completion);
        true
    }
}
