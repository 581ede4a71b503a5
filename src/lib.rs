pub mod batch;
pub mod cli;
pub mod command;
pub mod lookup;
pub mod makefile;
