pub mod dispatch;
pub mod moderation;
pub mod warnings;
