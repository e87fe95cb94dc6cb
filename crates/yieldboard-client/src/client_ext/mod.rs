pub mod couchdb;

pub use reqwest::Client;
