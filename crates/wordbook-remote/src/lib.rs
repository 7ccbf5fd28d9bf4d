mod client;

pub use client::{AddWordResponse, WordbookClient, WordbookListing};
