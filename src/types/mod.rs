//! Data types for the FAQ matcher
//!
//! This module contains the knowledge base rows, match results and
//! analytics events used throughout the crate.

mod analytics;
mod faq;
mod matching;

pub use analytics::{AnalyticsEvent, AnalyticsEventType};
pub use faq::{FaqEntry, FaqRecord};
pub use matching::{FaqMatch, MatchType};
