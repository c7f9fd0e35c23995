//! Read-only views of a timeline, ready to be printed.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use textwrap::wrap;

/// Width of the tweet column before the text is wrapped onto the next line.
const TEXT_WIDTH: usize = 60;
/// Width of the marker, id and likes columns together.
const TEXT_OFFSET: usize = 21;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    /// The timeline has no posts.
    Empty,
    Post {
        selected: bool,
        id: u32,
        likes: u32,
        text: String,
    },
}

/// The rows of a timeline, displayed as a table:
///
/// ```text
/// Sel     ID   Likes   Tweet
/// -->    100       3   Hello there
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct RenderedTimeline {
    rows: Vec<DisplayRow>,
}

impl RenderedTimeline {
    pub fn new(rows: Vec<DisplayRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }
}

impl Display for RenderedTimeline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {:>6} {:>7} {:>7}", "Sel", "ID", "Likes", "Tweet")?;
        for row in self.rows.iter() {
            match row {
                DisplayRow::Empty => writeln!(f, "{:>25}", "***** Empty *****")?,
                DisplayRow::Post {
                    selected,
                    id,
                    likes,
                    text,
                } => {
                    let marker = if *selected { "-->" } else { "" };
                    write!(f, "{marker:<7}{id:<9} {likes:<3} ")?;
                    let options = textwrap::Options::new(TEXT_WIDTH).break_words(true);
                    let mut lines = wrap(text, options).into_iter();
                    writeln!(f, "{}", lines.next().unwrap_or_default())?;
                    for line in lines {
                        writeln!(f, "{:width$}{line}", "", width = TEXT_OFFSET)?;
                    }
                }
            }
        }
        Ok(())
    }
}
