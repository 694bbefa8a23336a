//! Canned greeting replies for common prompts, answered without touching
//! the document collection.
//!
//! Matching is two layers deep: an exact lookup on the normalized query,
//! then an ordered list of whole-string patterns covering synonym variants
//! per intent. Every pattern maps to a canonical key that must resolve to a
//! reply; that resolution is validated when the table is built so a dead
//! rule fails at startup rather than at request time.

use std::collections::HashMap;

use anyhow::{bail, Result};
use regex::Regex;

use crate::text::normalize;

const REPLY_HI: &str = "Hello! How can I help you today?";
const REPLY_NAME: &str = "I'm Lace, your virtual assistant.";
const REPLY_HOW: &str = "I'm doing well, thank you! How can I help you?";
const REPLY_THANKS: &str = "You're welcome!";
const REPLY_GOODBYE: &str = "Goodbye! Have a great day!";
const REPLY_BYE: &str = "Goodbye! Take care!";

/// One pattern rule: a regex anchored over the entire normalized query,
/// joined to its reply through a canonical intent key.
struct GreetingRule {
    pattern: Regex,
    key: &'static str,
}

/// Fixed greeting lookup tables. Built once at startup, read-only after.
pub struct GreetingTable {
    direct: HashMap<&'static str, &'static str>,
    rules: Vec<GreetingRule>,
    replies: HashMap<&'static str, &'static str>,
}

impl GreetingTable {
    /// Build the built-in rule set and verify every pattern key resolves
    /// to a reply.
    pub fn builtin() -> Result<Self> {
        let direct = HashMap::from([
            ("hi", REPLY_HI),
            ("who are you", REPLY_NAME),
            ("how are you", REPLY_HOW),
            ("thanks", REPLY_THANKS),
            ("goodbye", REPLY_GOODBYE),
            ("bye", REPLY_BYE),
        ]);

        let replies = HashMap::from([
            ("hi", REPLY_HI),
            ("what is your name", REPLY_NAME),
            ("how are you", REPLY_HOW),
            ("thanks", REPLY_THANKS),
            ("goodbye", REPLY_GOODBYE),
        ]);

        // Patterns run against the already-normalized query, so synonyms
        // are written in normalized form ("whats up", never "what's up").
        // The trailing [\s!.?] tolerance is redundant after normalization
        // but kept as a second layer for phrase-level variants.
        let rule_table: [(&str, &str); 5] = [
            (r"^(hi|hello|hey|greetings)[\s!.]*$", "hi"),
            (
                r"^(what is your name|who are you|tell me about yourself)[\s?]*$",
                "what is your name",
            ),
            (
                r"^(how are you|how do you do|whats up|status)[\s?]*$",
                "how are you",
            ),
            (r"^(thanks|thank you)[\s!.]*$", "thanks"),
            (r"^(goodbye|bye|farewell)[\s!.]*$", "goodbye"),
        ];

        let mut rules = Vec::with_capacity(rule_table.len());
        for (pattern, key) in rule_table {
            if !replies.contains_key(key) {
                bail!("greeting rule {pattern:?} maps to key {key:?} with no reply");
            }
            rules.push(GreetingRule {
                pattern: Regex::new(pattern)?,
                key,
            });
        }

        Ok(Self {
            direct,
            rules,
            replies,
        })
    }

    /// Match a raw query against the greeting tables. Returns the canned
    /// reply on a hit, `None` when the query is not a greeting.
    pub fn match_greeting(&self, raw_query: &str) -> Option<&'static str> {
        let normalized = normalize(raw_query);

        if let Some(reply) = self.direct.get(normalized.as_str()).copied() {
            return Some(reply);
        }

        // First matching rule wins; declaration order is fixed.
        for rule in &self.rules {
            if rule.pattern.is_match(&normalized) {
                return self.replies.get(rule.key).copied();
            }
        }

        None
    }
}
