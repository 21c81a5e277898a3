use crate::domain::text;

/// Transient edit buffer for one list title or card while it is being edited
///
/// Drafts live in the presentation layer and are never part of a [`Board`]
/// snapshot. Committing yields the text to send to the engine, or `None` when
/// the edit should simply revert.
///
/// [`Board`]: crate::Board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    original: String,
    text: String,
}

impl Draft {
    /// Starts editing a value, prefilled with its committed text
    pub fn begin(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            text: original.clone(),
            original,
        }
    }

    /// Starts a draft for something that does not exist yet (a new card)
    pub fn empty() -> Self {
        Self::begin(String::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// True when committing would produce an edit
    pub fn is_dirty(&self) -> bool {
        text::normalize(&self.text)
            .map(|trimmed| trimmed != self.original)
            .unwrap_or(false)
    }

    /// Finishes the edit. Blank or unchanged text reverts.
    pub fn commit(self) -> Option<String> {
        match text::normalize(&self.text) {
            Some(trimmed) if trimmed != self.original => Some(trimmed.to_string()),
            _ => None,
        }
    }

    /// Abandons the edit, returning the committed text to show again
    pub fn cancel(self) -> String {
        self.original
    }
}
