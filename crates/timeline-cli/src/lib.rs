//! Console front-end of the timeline. The menu loop only talks to a
//! `Session` and to the given reader/writer, so it can be driven by a
//! terminal or by a script.
pub mod menu;

pub use menu::{run, MenuChoice};
