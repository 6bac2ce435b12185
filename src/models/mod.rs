mod message;
mod webhook;

pub use message::{Message, Role};
pub use webhook::{QueryRequest, WebhookReply, NO_RESPONSE_FALLBACK};
