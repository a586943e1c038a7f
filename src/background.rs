use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crate::errors::*;
use crate::query::{query_motd, MotdRequest};

/// Handle to a query running on a background thread.
///
/// Dropping the handle without calling [PendingQuery::wait] leaves the worker
/// running to completion; there is no cancellation.
pub struct PendingQuery {
    worker: JoinHandle<Result<String>>,
}

impl PendingQuery {
    /// Blocks until the background query finishes, yielding the MOTD or the
    /// error the query ended with.
    pub fn wait(self) -> Result<String> {
        self.worker
            .join()
            .unwrap_or_else(|_| Err(QueryError::UnknownError("query worker panicked".into())))
    }
}

impl<'a> MotdRequest<'a> {
    /// Runs the query on a background thread and returns a handle to wait on.
    pub fn query_deferred(self) -> PendingQuery {
        let MotdRequest {
            hostname,
            port,
            timeout,
        } = self;
        let host = hostname.into_owned();

        PendingQuery {
            worker: thread::spawn(move || query_motd(&host, port, timeout)),
        }
    }

    /// Runs the query on a detached background thread and hands the outcome
    /// to one of the two continuations.
    ///
    /// Every failure ends up in `on_error`; a worker that dies in an
    /// unexpected way is reported as [QueryError::UnknownError] rather than
    /// vanishing with the thread.
    pub fn query_detached<S, E>(self, on_success: S, on_error: E)
    where
        S: FnOnce(String) + Send + 'static,
        E: FnOnce(QueryError) + Send + 'static,
    {
        let MotdRequest {
            hostname,
            port,
            timeout,
        } = self;
        let host = hostname.into_owned();

        thread::spawn(move || {
            match panic::catch_unwind(AssertUnwindSafe(|| query_motd(&host, port, timeout))) {
                Ok(Ok(motd)) => on_success(motd),
                Ok(Err(e)) => on_error(e),
                Err(_) => on_error(QueryError::UnknownError("query worker panicked".into())),
            }
        });
    }
}
