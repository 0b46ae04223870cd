//! Effectful operations using Stillwater.
//!
//! Everything else in the crate is a pure core. This module is the
//! imperative shell: submission is described as an `Effect` over an
//! environment that provides a [`SubmissionGateway`], and the caller decides
//! when and where to run it.
//!
//! # Example
//!
//! ```rust
//! use onboarding::effects::{Submission, SubmissionGateway, SubmissionReceipt, SubmitError};
//! use chrono::Utc;
//!
//! #[derive(Clone)]
//! struct AcceptAll;
//!
//! impl SubmissionGateway for AcceptAll {
//!     fn deliver(&self, submission: &Submission) -> Result<SubmissionReceipt, SubmitError> {
//!         Ok(SubmissionReceipt {
//!             submission_id: submission.id,
//!             reference: "ONB-0001".to_string(),
//!             accepted_at: Utc::now(),
//!         })
//!     }
//! }
//! ```

mod submission;

pub use submission::{deliver, Submission, SubmissionGateway, SubmissionReceipt, SubmitError};
