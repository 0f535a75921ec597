pub mod batch;
pub mod models;
pub mod stemmer;

#[macro_use]
extern crate failure;
#[macro_use]
extern crate serde_derive;

pub use crate::stemmer::stem;
