//! Reaction-driven embed pagination and confirmation dialogs for twilight bots.
//!
//! Sessions talk to Discord through the [`ChatHost`] trait; [`TwilightHost`]
//! is the production implementation.

/// Splitting item lists into page-sized groups.
pub mod chunk;
/// Session configuration and defaults.
pub mod config;
/// Reaction controls and their signals.
pub mod controls;
/// Wrapping page cursor.
pub mod cursor;
mod dialog;
/// Host events and filters.
pub mod event;
/// Session error type.
pub mod error;
/// Page marker formatting.
pub mod format;
/// Chat platform seam.
pub mod host;
mod prompt;

mod check_paginator;
mod embed_paginator;

pub use check_paginator::{CheckPaginator, CheckPaginatorBuilder};
pub use chunk::{DEFAULT_SUB_LIST_LEN, generate_sub_lists};
pub use config::{AuthorizedUsers, Invocation, SessionConfig};
pub use controls::{
    ConfirmControls, ConfirmSignal, ControlEmoji, ControlSignal, PaginatorControls,
};
pub use cursor::Cursor;
pub use embed_paginator::{EmbedPaginator, EmbedPaginatorBuilder};
pub use error::PaginatorError;
pub use format::{PageFormat, format_pages};
pub use host::{ChatHost, SentMessage, TwilightHost, best_effort};
pub use prompt::parse_page_index;
