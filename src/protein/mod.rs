pub mod catalog;
pub mod fasta;
pub mod models;
