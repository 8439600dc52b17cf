//! Wire models shared by the comments backend and anything that talks to it.

pub mod model;
pub mod requests;
