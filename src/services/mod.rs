pub mod faq;
pub mod history;
pub mod moderation;
