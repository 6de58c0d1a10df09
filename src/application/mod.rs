pub mod dispatcher;
pub mod engine;
