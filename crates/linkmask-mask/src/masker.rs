//! Link masking engine

use linkmask_core::{Error, MaskError, MaskedMessage, Message, Result};

pub const DEFAULT_SCHEME: &str = "http://";
pub const DEFAULT_MASK_CHAR: char = '*';

/// Per-message transformation applied by pool workers
pub trait Transform: Send + Sync {
    fn transform(&self, message: &Message) -> std::result::Result<MaskedMessage, MaskError>;
}

/// Replaces the characters following a scheme marker with a mask character,
/// up to the next space or the end of the message
#[derive(Debug, Clone)]
pub struct LinkMasker {
    scheme: String,
    mask_char: char,
}

impl LinkMasker {
    pub fn new(scheme: impl Into<String>, mask_char: char) -> Result<Self> {
        let scheme = scheme.into();
        // An empty marker matches everywhere without advancing
        if scheme.is_empty() {
            return Err(Error::InvalidScheme);
        }

        Ok(Self { scheme, mask_char })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Mask every link in `message`
    pub fn mask(&self, message: &str) -> String {
        self.mask_with_stats(message).0
    }

    /// Mask every link in `message` and report how many scheme markers were found
    pub fn mask_with_stats(&self, message: &str) -> (String, usize) {
        let mut result = String::with_capacity(message.len());
        let mut links = 0;
        let mut rest = message;

        while let Some(pos) = rest.find(self.scheme.as_str()) {
            result.push_str(&rest[..pos]);
            result.push_str(&self.scheme);
            links += 1;

            let after = &rest[pos + self.scheme.len()..];
            let run_end = after.find(' ').unwrap_or(after.len());
            let run_len = after[..run_end].len();
            result.extend(std::iter::repeat_n(self.mask_char, run_len));

            rest = &after[run_end..];
        }
        result.push_str(rest);

        (result, links)
    }
}

impl Default for LinkMasker {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

impl Transform for LinkMasker {
    fn transform(&self, message: &Message) -> std::result::Result<MaskedMessage, MaskError> {
        let (text, links) = self.mask_with_stats(&message.text);
        Ok(MaskedMessage {
            index: message.index,
            text,
            links,
        })
    }
}
