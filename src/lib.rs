pub mod cli;
pub mod input;
pub mod output;
pub mod record;
