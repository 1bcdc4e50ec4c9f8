pub mod dispatcher;
pub mod message;
pub mod sent_set;
