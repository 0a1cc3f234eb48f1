use serde::Deserialize;

use crate::types::{Card, Sender};

const SEED_JSON: &str = include_str!("../assets/seed.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SeedMessage {
    pub text: String,
    pub sender: Sender,
}

/// Static content shown on first render: the listing cards and an example conversation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Seed {
    pub heading: String,
    pub cards: Vec<Card>,
    pub messages: Vec<SeedMessage>,
}

impl Seed {
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
