pub mod dispatcher;
pub mod ihsg;
pub mod markdown;
pub mod profiles;
pub mod synthesizer;
