//! Text editing state
//!
//! Tracks the entry currently receiving keyboard input: either a brand-new
//! entry not yet in the document, or a committed entry being re-edited in
//! place after a double right-click.

use slate_core::{Document, TextEntry};

/// What the editor is editing
#[derive(Debug)]
pub enum EditTarget {
    /// A new entry, held here until committed into the document
    New(TextEntry),
    /// A committed entry, addressed by its text index in the document
    Existing(usize),
}

/// Keyboard focus for canvas text
#[derive(Debug, Default)]
pub struct TextEditor {
    target: Option<EditTarget>,
}

impl TextEditor {
    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// Start a new entry at the given pixel position
    pub fn begin_new(&mut self, entry: TextEntry) {
        self.target = Some(EditTarget::New(entry));
    }

    /// Re-edit a committed entry in place
    pub fn begin_existing(&mut self, index: usize, document: &mut Document) {
        if let Some(entry) = document.text_mut(index) {
            entry.pending = true;
            self.target = Some(EditTarget::Existing(index));
        }
    }

    /// The entry currently receiving input
    pub fn entry_mut<'a>(&'a mut self, document: &'a mut Document) -> Option<&'a mut TextEntry> {
        match self.target.as_mut()? {
            EditTarget::New(entry) => Some(entry),
            EditTarget::Existing(index) => document.text_mut(*index),
        }
    }

    /// The new entry not yet in the document, if that is what is being edited.
    /// Committed entries are already reachable through the document.
    pub fn pending_new_mut(&mut self) -> Option<&mut TextEntry> {
        match self.target.as_mut()? {
            EditTarget::New(entry) => Some(entry),
            EditTarget::Existing(_) => None,
        }
    }

    pub fn insert(&mut self, document: &mut Document, text: &str) {
        if let Some(entry) = self.entry_mut(document) {
            entry.content.push_str(text);
        }
    }

    pub fn backspace(&mut self, document: &mut Document) {
        if let Some(entry) = self.entry_mut(document) {
            entry.pop_char();
        }
    }

    /// Finish editing. New entries are committed into the document (empty
    /// ones are dropped); existing entries just stop blinking.
    pub fn commit(&mut self, document: &mut Document) {
        match self.target.take() {
            Some(EditTarget::New(entry)) => document.commit_text(entry),
            Some(EditTarget::Existing(index)) => {
                if let Some(entry) = document.text_mut(index) {
                    entry.pending = false;
                }
            }
            None => {}
        }
    }
}
