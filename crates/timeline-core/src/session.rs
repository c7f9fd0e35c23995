//! The state of one run of the program: the timeline together with the
//! post the user currently has selected.

use crate::{
    config::TimelineConfig,
    constant::SEED_POSTS,
    post::Post,
    render::RenderedTimeline,
    store::TimelineStore,
    TimelineResult,
};

#[derive(Debug, Default)]
pub struct Session {
    store: TimelineStore,
    selected: Option<usize>,
}

impl Session {
    pub fn new(config: &TimelineConfig) -> Self {
        let mut session = Session {
            store: TimelineStore::new(config),
            selected: None,
        };
        if config.seed {
            session.seed();
        }
        session
    }

    /// Put the starter posts on the timeline. Stops quietly once the
    /// timeline is full.
    pub fn seed(&mut self) {
        for text in SEED_POSTS {
            if self.add(text.to_string()).is_err() {
                break;
            }
        }
    }

    /// Adds a post and selects it.
    pub fn add(&mut self, text: String) -> TimelineResult<usize> {
        let idx = self.store.add(text)?;
        self.selected = Some(idx);
        Ok(idx)
    }

    /// Select the post with the given id. On failure the current
    /// selection is kept.
    pub fn select(&mut self, id: i64) -> TimelineResult<usize> {
        let idx = self.store.find_by_id(id)?;
        self.selected = Some(idx);
        Ok(idx)
    }

    pub fn edit(&mut self, new_text: String) -> TimelineResult<()> {
        self.store.edit(self.selected, new_text)
    }

    pub fn like(&mut self) -> TimelineResult<()> {
        self.store.like(self.selected)
    }

    /// Deletes the selected post and clears the selection.
    pub fn delete(&mut self) -> TimelineResult<Post> {
        let post = self.store.delete(self.selected)?;
        self.selected = None;
        Ok(post)
    }

    pub fn render(&self) -> RenderedTimeline {
        RenderedTimeline::new(self.store.render(self.selected))
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_post(&self) -> TimelineResult<&Post> {
        self.store.find_by_position(self.selected)
    }

    pub fn store(&self) -> &TimelineStore {
        &self.store
    }
}
