pub mod chat;
pub mod ihsg;
pub mod quote;
pub mod series;
