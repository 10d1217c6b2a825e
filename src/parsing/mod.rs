//! Raw log parsing.
//!
//! Turns the lines of a text export into author names, hours and message
//! bodies. Every function here works on borrowed lines and allocates only its
//! result.

pub mod whatsapp;

// Re-export commonly used items
pub use whatsapp::{
    author_of, belongs_to, extract_authors, hours_of, is_author_line, messages_of,
};
