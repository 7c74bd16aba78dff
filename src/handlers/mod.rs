pub mod analysis;
pub mod chat;
pub mod health;
pub mod ihsg;
pub mod page;
pub mod quotes;
pub mod series;
pub mod ws;
