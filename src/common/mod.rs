pub mod location;
pub mod token;
