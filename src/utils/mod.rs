pub mod string;

// Re-export common utilities
pub use string::strip_whitespace;
