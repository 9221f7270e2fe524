pub mod content;
pub mod host;
pub mod layout;
pub mod models;
pub mod search;
