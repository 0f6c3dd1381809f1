pub mod checklist;
pub mod standards;
pub mod symbols;
