pub mod confirm;
pub mod embeds;
pub mod help;
pub mod pages;
pub mod ping;
