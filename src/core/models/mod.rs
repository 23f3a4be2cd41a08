pub mod alphabet;
pub mod candidate;
pub mod charset_table;
