//! This module defines the `Post` struct, a single entry of the timeline.

use crate::{config::OverflowPolicy, TimelineError, TimelineResult};

/// Every time a new post is added by the user,
/// this is the struct that stores all the necessary data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: u32,
    text: String,
    likes: u32,
}

impl Post {
    /// Create a new post with no likes. `text` is expected to be
    /// verified already, see [`fit_text`].
    pub(crate) fn new(id: u32, text: String) -> Self {
        Post { id, text, likes: 0 }
    }

    /// Replace the text of an existing post.
    pub(crate) fn update_text(&mut self, new_text: String) {
        self.text = new_text;
    }

    pub(crate) fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }
}

/// Bring `text` within `max_len` characters, either by cutting it short
/// or by refusing it, depending on `policy`.
pub(crate) fn fit_text(
    text: String,
    max_len: usize,
    policy: OverflowPolicy,
) -> TimelineResult<String> {
    let curr_size = text.chars().count();
    if curr_size <= max_len {
        return Ok(text);
    }
    match policy {
        OverflowPolicy::Reject => Err(TimelineError::PostTooLong {
            max_size: max_len,
            curr_size,
        }),
        OverflowPolicy::Truncate => Ok(text.chars().take(max_len).collect()),
    }
}
