pub mod emit;
pub mod extract;
pub mod parser;
pub mod rules;
pub mod table;
