use crate::{
    config::{OverflowPolicy, TimelineConfig},
    constant::FIRST_POST_ID,
    post::{fit_text, Post},
    render::DisplayRow,
    TimelineError, TimelineResult,
};

/// A timeline holds a bounded number of posts, oldest first.
///
/// Ids are never handed out twice: a timeline emptied by deletes keeps
/// counting from its highest id instead of going back to 100.
#[derive(Debug)]
pub struct TimelineStore {
    posts: Vec<Post>,
    capacity: usize,
    max_post_len: usize,
    overflow: OverflowPolicy,
    /// Highest id handed out so far, kept so that deleted ids never come back.
    last_id: Option<u32>,
}

impl Default for TimelineStore {
    fn default() -> Self {
        Self::new(&TimelineConfig::default())
    }
}

impl TimelineStore {
    pub fn new(config: &TimelineConfig) -> Self {
        TimelineStore {
            posts: Vec::with_capacity(config.capacity),
            capacity: config.capacity,
            max_post_len: config.max_post_len,
            overflow: config.overflow,
            last_id: None,
        }
    }

    // ***
    // Command handlers
    // ***

    /// Appends a new post and returns its index.
    pub fn add(&mut self, text: String) -> TimelineResult<usize> {
        if self.posts.len() >= self.capacity {
            return Err(TimelineError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let text = fit_text(text, self.max_post_len, self.overflow)?;
        let id = self.next_id();
        self.posts.push(Post::new(id, text));
        self.last_id = Some(id);
        log::debug!("Added post {id} at index {}", self.posts.len() - 1);
        Ok(self.posts.len() - 1)
    }

    /// Replace the text of the post at `index`.
    pub fn edit(&mut self, index: Option<usize>, new_text: String) -> TimelineResult<()> {
        let idx = self.validate_index(index)?;
        let new_text = fit_text(new_text, self.max_post_len, self.overflow)?;
        self.posts[idx].update_text(new_text);
        log::debug!("Edited post at index {idx}");
        Ok(())
    }

    /// Add a like to the post at `index`.
    pub fn like(&mut self, index: Option<usize>) -> TimelineResult<()> {
        let idx = self.validate_index(index)?;
        self.posts[idx].like();
        log::debug!("Liked post at index {idx}");
        Ok(())
    }

    /// Removes the post at `index`; every later post moves one position
    /// earlier. Any selection pointing into the timeline is stale afterwards.
    pub fn delete(&mut self, index: Option<usize>) -> TimelineResult<Post> {
        let idx = self.validate_index(index)?;
        let post = self.posts.remove(idx);
        log::debug!("Deleted post {} from index {idx}", post.id());
        Ok(post)
    }

    // ***
    // Queries
    // ***

    /// The id the next added post will get: 100 for a fresh timeline,
    /// otherwise one past the highest id ever assigned.
    pub fn next_id(&self) -> u32 {
        let highest = self
            .posts
            .iter()
            .map(Post::id)
            .chain(self.last_id)
            .max();
        match highest {
            Some(id) => id + 1,
            None => FIRST_POST_ID,
        }
    }

    pub fn find_by_position(&self, index: Option<usize>) -> TimelineResult<&Post> {
        let idx = self.validate_index(index)?;
        Ok(&self.posts[idx])
    }

    /// Returns the index of the post with the given id. Ids outside the
    /// range ever assigned, negative ones included, are simply not found.
    pub fn find_by_id(&self, id: i64) -> TimelineResult<usize> {
        if self.posts.is_empty() {
            return Err(TimelineError::EmptyStore);
        }
        self.posts
            .iter()
            .position(|post| i64::from(post.id()) == id)
            .ok_or(TimelineError::NotFound { id })
    }

    /// One row per post, in timeline order, with `selected` marked.
    pub fn render(&self, selected: Option<usize>) -> Vec<DisplayRow> {
        if self.posts.is_empty() {
            return vec![DisplayRow::Empty];
        }
        self.posts
            .iter()
            .enumerate()
            .map(|(idx, post)| DisplayRow::Post {
                selected: selected == Some(idx),
                id: post.id(),
                likes: post.likes(),
                text: post.text().to_string(),
            })
            .collect()
    }

    // ***
    // Helpers
    // ***

    fn validate_index(&self, index: Option<usize>) -> TimelineResult<usize> {
        match index {
            Some(idx) if idx < self.posts.len() => Ok(idx),
            _ => Err(TimelineError::NotSelected),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Get the number of posts in the timeline
    pub fn size(&self) -> usize {
        self.posts.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.posts.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(capacity: usize) -> TimelineStore {
        TimelineStore::new(&TimelineConfig {
            capacity,
            ..Default::default()
        })
    }

    fn ids(store: &TimelineStore) -> Vec<u32> {
        store.posts().iter().map(Post::id).collect()
    }

    #[test]
    fn ids_start_at_100_and_increase() {
        let mut store = store_with(5);
        assert_eq!(store.next_id(), 100);
        for expected in 0..5 {
            let idx = store.add(format!("post {expected}")).unwrap();
            assert_eq!(idx, expected);
        }
        assert_eq!(ids(&store), vec![100, 101, 102, 103, 104]);
    }

    #[test]
    fn add_beyond_capacity_is_refused() {
        let mut store = store_with(2);
        store.add("A".into()).unwrap();
        store.add("B".into()).unwrap();
        assert!(store.is_full());

        let err = store.add("C".into()).unwrap_err();
        assert_eq!(err, TimelineError::CapacityExceeded { capacity: 2 });
        assert_eq!(store.size(), 2);
        assert_eq!(ids(&store), vec![100, 101]);
    }

    #[test]
    fn delete_shifts_and_never_reuses_ids() {
        let mut store = store_with(10);
        assert_eq!(store.add("A".into()).unwrap(), 0);
        assert_eq!(store.add("B".into()).unwrap(), 1);

        let removed = store.delete(Some(0)).unwrap();
        assert_eq!(removed.id(), 100);
        assert_eq!(store.size(), 1);
        assert_eq!(store.posts()[0].id(), 101);

        assert_eq!(store.add("C".into()).unwrap(), 1);
        assert_eq!(ids(&store), vec![101, 102]);
    }

    #[test]
    fn deleting_the_newest_post_does_not_recycle_its_id() {
        let mut store = store_with(10);
        store.add("A".into()).unwrap();
        store.add("B".into()).unwrap();
        store.delete(Some(1)).unwrap();
        store.delete(Some(0)).unwrap();
        assert!(store.is_empty());

        store.add("C".into()).unwrap();
        assert_eq!(ids(&store), vec![102]);
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut store = store_with(10);
        for text in ["A", "B", "C", "D"] {
            store.add(text.into()).unwrap();
        }
        store.delete(Some(1)).unwrap();
        let texts: Vec<&str> = store.posts().iter().map(Post::text).collect();
        assert_eq!(texts, vec!["A", "C", "D"]);
        assert_eq!(ids(&store), vec![100, 102, 103]);
    }

    #[test]
    fn find_by_id_on_empty_store() {
        let store = store_with(10);
        assert_eq!(store.find_by_id(100), Err(TimelineError::EmptyStore));
    }

    #[test]
    fn find_by_id_missing_and_present() {
        let mut store = store_with(10);
        store.add("A".into()).unwrap();
        store.add("B".into()).unwrap();
        assert_eq!(store.find_by_id(101), Ok(1));
        assert_eq!(
            store.find_by_id(7),
            Err(TimelineError::NotFound { id: 7 })
        );
        assert_eq!(
            store.find_by_id(-5),
            Err(TimelineError::NotFound { id: -5 })
        );
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn edit_like_delete_first_post() {
        let mut store = store_with(10);
        store.add("old".into()).unwrap();

        store.edit(Some(0), "new".into()).unwrap();
        assert_eq!(store.posts()[0].text(), "new");
        assert_eq!(store.posts()[0].id(), 100);
        assert_eq!(store.posts()[0].likes(), 0);

        store.like(Some(0)).unwrap();
        assert_eq!(store.posts()[0].likes(), 1);
        assert_eq!(store.posts()[0].text(), "new");

        store.delete(Some(0)).unwrap();
        assert_eq!(store.size(), 0);
    }

    #[test]
    fn like_touches_only_one_post() {
        let mut store = store_with(10);
        store.add("A".into()).unwrap();
        store.add("B".into()).unwrap();
        store.like(Some(1)).unwrap();
        store.like(Some(1)).unwrap();

        assert_eq!(store.posts()[0].likes(), 0);
        assert_eq!(store.posts()[0].text(), "A");
        assert_eq!(store.posts()[1].likes(), 2);
        assert_eq!(store.posts()[1].text(), "B");
    }

    #[test]
    fn find_by_position_accepts_first_and_last() {
        let mut store = store_with(10);
        assert_eq!(
            store.find_by_position(Some(0)).unwrap_err(),
            TimelineError::NotSelected
        );
        store.add("A".into()).unwrap();
        store.add("B".into()).unwrap();
        assert_eq!(store.find_by_position(Some(0)).unwrap().text(), "A");
        assert_eq!(store.find_by_position(Some(1)).unwrap().text(), "B");
        assert_eq!(
            store.find_by_position(None).unwrap_err(),
            TimelineError::NotSelected
        );
    }

    #[test]
    fn invalid_selection_is_not_selected() {
        let mut store = store_with(10);
        store.add("A".into()).unwrap();
        store.add("B".into()).unwrap();
        let before = store.posts().to_vec();

        assert_eq!(store.edit(None, "x".into()), Err(TimelineError::NotSelected));
        assert_eq!(store.edit(Some(5), "x".into()), Err(TimelineError::NotSelected));
        assert_eq!(store.like(Some(2)), Err(TimelineError::NotSelected));
        assert_eq!(store.delete(None).unwrap_err(), TimelineError::NotSelected);
        assert_eq!(
            store.find_by_position(Some(2)).unwrap_err(),
            TimelineError::NotSelected
        );
        assert_eq!(store.posts(), before.as_slice());
    }

    #[test]
    fn overflow_policy_applies_to_add_and_edit() {
        let mut store = TimelineStore::new(&TimelineConfig {
            max_post_len: 4,
            overflow: OverflowPolicy::Reject,
            ..Default::default()
        });
        assert_eq!(
            store.add("too long".into()),
            Err(TimelineError::PostTooLong {
                max_size: 4,
                curr_size: 8
            })
        );
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 100);

        store.add("ok".into()).unwrap();
        assert!(store.edit(Some(0), "still too long".into()).is_err());
        assert_eq!(store.posts()[0].text(), "ok");

        let mut store = TimelineStore::new(&TimelineConfig {
            max_post_len: 4,
            ..Default::default()
        });
        store.add("truncated".into()).unwrap();
        assert_eq!(store.posts()[0].text(), "trun");
    }

    #[test]
    fn render_marks_selection() {
        let mut store = store_with(10);
        assert_eq!(store.render(None), vec![DisplayRow::Empty]);

        store.add("A".into()).unwrap();
        store.add("B".into()).unwrap();
        store.like(Some(1)).unwrap();
        let rows = store.render(Some(1));
        assert_eq!(
            rows,
            vec![
                DisplayRow::Post {
                    selected: false,
                    id: 100,
                    likes: 0,
                    text: "A".into()
                },
                DisplayRow::Post {
                    selected: true,
                    id: 101,
                    likes: 1,
                    text: "B".into()
                },
            ]
        );
    }
}
