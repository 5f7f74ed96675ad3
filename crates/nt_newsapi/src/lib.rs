pub mod client;
pub mod cli;

pub use client::NewsApiClient;

pub use cli::{HeadlinesArgs, HeadlinesCommands, handle_command};

pub mod prelude {
    pub use super::client::NewsApiClient;
    pub use nt_core::{Article, Category, HeadlineSource, Result, Error};
}
