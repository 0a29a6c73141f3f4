pub mod args;
pub mod dispatcher;
