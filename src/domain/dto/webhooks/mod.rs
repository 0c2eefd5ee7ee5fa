pub mod request;

pub use request::{PolkaWebhookData, PolkaWebhookRequest, USER_UPGRADED_EVENT};
