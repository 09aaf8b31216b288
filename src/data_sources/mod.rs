pub mod mutation_library;
