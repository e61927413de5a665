//! Feed module
//!
//! Row projection and rendering of the message list.

pub mod renderer;

pub use renderer::{
    project_rows, render_text, row_key, FeedList, FeedListRenderer, FeedRow, RowChanges,
    SCREEN_TITLE,
};
