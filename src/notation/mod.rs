pub mod mutation_notation;
