//! Encodes the director permission tier into the roster string.
//!
//! The tournament service stores directors as plain usernames. A read-only
//! director is stored as `name:readonly`; anything else is a full director.

use crate::constants::wire::{
    FULL_DIRECTOR_RATING, READONLY_DIRECTOR_RATING, READONLY_DIRECTOR_SUFFIX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectorTier {
    Full,
    ReadOnly,
}

impl DirectorTier {
    /// Rating field sent along with an add-directors request.
    pub fn wire_rating(&self) -> i32 {
        match self {
            DirectorTier::Full => FULL_DIRECTOR_RATING,
            DirectorTier::ReadOnly => READONLY_DIRECTOR_RATING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorRecord {
    pub display_name: String,
    pub tier: DirectorTier,
}

/// Builds the roster string stored for a director.
pub fn encode(username: &str, tier: DirectorTier) -> String {
    match tier {
        DirectorTier::Full => username.to_string(),
        DirectorTier::ReadOnly => format!("{username}{READONLY_DIRECTOR_SUFFIX}"),
    }
}

/// Splits a roster string into display name and tier.
///
/// A username that itself ends in `:readonly` cannot be told apart from a
/// read-only director; it always decodes as read-only.
pub fn decode(raw: &str) -> DirectorRecord {
    match raw.strip_suffix(READONLY_DIRECTOR_SUFFIX) {
        Some(name) => DirectorRecord {
            display_name: name.to_string(),
            tier: DirectorTier::ReadOnly,
        },
        None => DirectorRecord {
            display_name: raw.to_string(),
            tier: DirectorTier::Full,
        },
    }
}

/// Decodes a roster in server order.
pub fn decode_roster<S: AsRef<str>>(roster: &[S]) -> Vec<DirectorRecord> {
    roster.iter().map(|raw| decode(raw.as_ref())).collect()
}

/// A user has full director rights only when the roster holds their bare
/// username. The read-only form never grants them.
pub fn is_full_director<S: AsRef<str>>(roster: &[S], username: &str) -> bool {
    roster.iter().any(|raw| raw.as_ref() == username)
}
