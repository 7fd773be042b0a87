extern crate num_derive;
extern crate num_traits;

pub mod config;
pub mod driver;
pub mod errors;
pub mod league;
pub mod row_reader;
pub mod standings_writer;
