pub mod comment;
pub mod dataset;
