//! Live progress reporting

pub mod reporter;

pub use reporter::ConsoleReporter;
