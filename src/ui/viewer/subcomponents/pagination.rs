// SPDX-License-Identifier: MPL-2.0
//! Pagination sub-component: current page and the page number field.
//!
//! The field text and the committed page are tracked separately. Typing only
//! updates the text; the page changes when the text is submitted and passes
//! validation, or through next/previous/go-to. Every successful change writes
//! the new page number back into the field.

use crate::domain::{validate_page, validate_page_input, PageCount, PageNumber, ValidationError};

/// Pagination state.
#[derive(Debug, Clone)]
pub struct State {
    current: PageNumber,
    input: String,
    /// Set when the last submitted text was rejected; cleared on the next edit.
    input_error: Option<ValidationError>,
}

impl Default for State {
    fn default() -> Self {
        let current = PageNumber::FIRST;
        Self {
            current,
            input: current.to_string(),
            input_error: None,
        }
    }
}

/// Messages for the pagination sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance one page, clamped to the last page.
    Next,
    /// Go back one page, clamped to the first page.
    Previous,
    /// Jump to a page number.
    GoTo(i64),
    /// The page field text was edited.
    InputChanged(String),
    /// The page field was submitted with this text.
    InputSubmitted(String),
    /// Back to page 1 (new document).
    Reset,
}

/// Effects produced by pagination changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The committed page is now this one.
    PageChanged(PageNumber),
    /// Input was rejected; the committed page is unchanged.
    Rejected(ValidationError),
}

impl State {
    /// Handle a pagination message against a document of `total` pages.
    pub fn handle(&mut self, msg: Message, total: Option<PageCount>) -> Effect {
        match msg {
            Message::Next => match total.and_then(|t| self.current.next_within(t)) {
                Some(page) => self.commit(page),
                None => Effect::None,
            },
            Message::Previous => match total.and(self.current.previous()) {
                Some(page) => self.commit(page),
                None => Effect::None,
            },
            Message::GoTo(requested) => {
                match validate_page(requested, total) {
                    Ok(page) => self.commit(page),
                    Err(err) => Effect::Rejected(err),
                }
            }
            Message::InputChanged(text) => {
                self.input = text;
                self.input_error = None;
                Effect::None
            }
            Message::InputSubmitted(text) => {
                let result = validate_page_input(&text, total);
                self.input = text;
                match result {
                    Ok(page) => self.commit(page),
                    Err(err) => {
                        self.input_error = Some(err.clone());
                        Effect::Rejected(err)
                    }
                }
            }
            Message::Reset => {
                *self = Self::default();
                Effect::PageChanged(self.current)
            }
        }
    }

    fn commit(&mut self, page: PageNumber) -> Effect {
        self.current = page;
        self.input = page.to_string();
        self.input_error = None;
        Effect::PageChanged(page)
    }

    #[must_use]
    pub fn current(&self) -> PageNumber {
        self.current
    }

    /// Text currently shown in the page field.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn input_error(&self) -> Option<&ValidationError> {
        self.input_error.as_ref()
    }
}
