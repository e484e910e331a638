//! HTTP transport for the model server.
//!
//! Conversational exchanges are POSTed as JSON to the chat (or discuss)
//! path; knowledge is POSTed form-encoded to the knowledge path. Replies
//! are read from `choices[0]`.

mod api;
mod client;


pub use client::HttpTransport;
