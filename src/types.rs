use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub text: String,
    pub sender: Sender,
}

/// A service listed under the disclosure panel.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub title: String,
    pub address: String,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
}

impl Card {
    /// The link button is only shown when both its label and target are known.
    pub fn link(&self) -> Option<(&str, &str)> {
        match (&self.button_text, &self.button_link) {
            (Some(text), Some(href)) => Some((text.as_str(), href.as_str())),
            _ => None,
        }
    }
}
