//! Submission source port
//!
//! Defines the interface the sync engine consumes submissions through.

use super::super::models::{RawSubmission, SourceOrder};

/// A paginated stream of submission records
///
/// Implementations own authentication, transport and pagination. The
/// engine treats `Ok(None)` and an empty page alike as end of stream.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSource {
    /// Fetch the next page of submissions
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn next_page(&mut self) -> anyhow::Result<Option<Vec<RawSubmission>>>;

    /// Whether another call to `next_page` may yield records
    ///
    /// Answered from state already fetched, without another request.
    fn has_more(&self) -> bool;

    /// Order in which this source yields submissions
    fn order(&self) -> SourceOrder;

    /// Human-readable description for logs (e.g., a file path or base URL)
    fn describe(&self) -> String;
}
