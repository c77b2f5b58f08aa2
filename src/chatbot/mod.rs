//! Support chatbot built on the FAQ matcher
//!
//! Answers from the knowledge base when the best match is confident
//! enough, otherwise asks a text generator, otherwise apologizes.

mod generator;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use crate::matcher::FaqMatcher;
use crate::types::{FaqMatch, MatchType};

pub use generator::{HttpTextGenerator, TextGenerator};

/// Top scores below this fall through to the generator
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Low-confidence matches passed to the generator as reference material
const CONTEXT_MATCHES: usize = 3;

pub const FALLBACK_REPLY: &str = "Maaf, saya belum bisa menjawab pertanyaan itu. \
Silakan hubungi tim dukungan kami. / Sorry, I can't answer that yet. \
Please contact our support team.";

const SYSTEM_PROMPT: &str = "You are the customer support assistant of a local marketplace \
where people list, buy and sell products and chat with each other. Answer briefly and \
politely, in the language the user writes in (Indonesian or English). If you are not sure, \
suggest contacting the support team.";

/// Where a reply came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReplySource {
    Faq {
        id: String,
        score: f64,
        #[serde(rename = "matchType")]
        match_type: MatchType,
    },
    Llm,
    Fallback,
}

/// Chatbot reply
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub answer: String,
    pub source: ReplySource,
}

impl ChatReply {
    fn fallback() -> Self {
        Self {
            answer: FALLBACK_REPLY.to_string(),
            source: ReplySource::Fallback,
        }
    }
}

/// FAQ-first responder with optional LLM fallback
pub struct ChatResponder {
    matcher: Arc<FaqMatcher>,
    generator: Option<Arc<dyn TextGenerator>>,
    confidence_threshold: f64,
}

impl ChatResponder {
    pub fn new(matcher: Arc<FaqMatcher>, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            matcher,
            generator,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Answer a user message
    pub async fn respond(&self, message: &str) -> ChatReply {
        if message.trim().is_empty() {
            return ChatReply::fallback();
        }

        let matches = self.matcher.find(message).await;

        if let Some(top) = matches.first() {
            if top.score >= self.confidence_threshold {
                return ChatReply {
                    answer: top.answer.clone(),
                    source: ReplySource::Faq {
                        id: top.id.clone(),
                        score: top.score,
                        match_type: top.match_type,
                    },
                };
            }
        }

        let Some(generator) = &self.generator else {
            return ChatReply::fallback();
        };

        debug!(
            top_score = matches.first().map(|m| m.score),
            "No confident FAQ match, using text generator"
        );

        let prompt = build_prompt(&matches);
        match generator.generate(&prompt, message).await {
            Ok(answer) if !answer.trim().is_empty() => ChatReply {
                answer,
                source: ReplySource::Llm,
            },
            Ok(_) => ChatReply::fallback(),
            Err(e) => {
                error!(error = %e, "Text generation failed");
                ChatReply::fallback()
            }
        }
    }
}

fn build_prompt(matches: &[FaqMatch]) -> String {
    let mut prompt = SYSTEM_PROMPT.to_string();

    if !matches.is_empty() {
        prompt.push_str("\n\nPossibly related FAQ entries:");
        for m in matches.iter().take(CONTEXT_MATCHES) {
            prompt.push_str(&format!("\nQ: {}\nA: {}", m.question, m.answer));
        }
    }

    prompt
}
