//! Core of the timeline: a bounded list of short posts that can be
//! added, selected, edited, liked and deleted. Everything lives in memory
//! for the duration of one run.
mod error;
pub mod config;
pub mod post;
pub mod render;
pub mod session;
pub mod store;

pub use error::{TimelineError, TimelineResult};

pub mod constant {
    /// Maximum number of posts on the timeline.
    pub const CAPACITY: usize = 10;
    /// Maximum length of a post, in characters.
    pub const MAX_POST_LEN: usize = 99;
    /// Id given to the first post of a fresh timeline.
    pub const FIRST_POST_ID: u32 = 100;
    pub const CONFIG_DIR: &str = ".timeline";
    pub const CONFIG_FILE: &str = "timeline.toml";
    pub const CONFIG_ENV: &str = "TIMELINE_CONF";
    pub const SEED_POSTS: [&str; 3] = [
        "Where do they get the seeds to plant seedless watermelons?",
        "Waffles are just pancakes with convenient boxes to hold your syrup.",
        "Last night I even struck up a conversation with a spider. Turns out he's a web designer.",
    ];
}
