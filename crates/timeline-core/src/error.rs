use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimelineError {
    /// The timeline already holds as many posts as it can.
    #[error("Timeline is full")]
    CapacityExceeded { capacity: usize },
    /// The operation needs a selected post, but the selection is absent
    /// or points past the end of the timeline.
    #[error("No tweet is selected.")]
    NotSelected,
    /// The requested/specified ID does not exist.
    #[error("ID was not found.")]
    NotFound { id: i64 },
    /// A lookup was attempted on a timeline without posts.
    #[error("Timeline is empty.")]
    EmptyStore,
    /// The post length exceeds the maximum length.
    #[error("Max allowed size of post: {max_size}, current size: {curr_size}")]
    PostTooLong { max_size: usize, curr_size: usize },
    #[error("Invalid config: {msg}")]
    InvalidConfig { msg: String },
}

impl TimelineError {
    pub fn config_error(msg: String) -> Self {
        Self::InvalidConfig { msg }
    }
}
