pub mod email;
pub mod regions;

pub use email::EmailError;
pub use email::SubscriberEmail;
