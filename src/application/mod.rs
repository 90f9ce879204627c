//! Application layer - readme manipulation operations

pub mod manipulator;

pub use manipulator::{Logger, ReadMeManipulator};
