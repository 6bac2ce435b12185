pub mod client;
pub mod dispatcher;
pub mod response;

pub use client::WebhookClient;
pub use dispatcher::{Dispatcher, Outcome, Reply};
pub use response::parse_reply;
