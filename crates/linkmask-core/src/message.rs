use serde::{Deserialize, Serialize};

/// A single unit of input text, tagged with its position in the source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub index: usize,
    pub text: String,
}

impl Message {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Tag raw texts with their positions
    pub fn sequence<I, S>(texts: I) -> Vec<Message>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Message::new(index, text))
            .collect()
    }
}

/// A message after its links have been masked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedMessage {
    pub index: usize,
    pub text: String,
    /// Number of scheme markers found in the original text
    pub links: usize,
}

/// Order in which masked messages reach the sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputOrder {
    /// Same order the source produced them
    #[default]
    Input,
    /// Whatever order the workers finished in
    Completion,
}
