pub mod batch;
pub mod position;
pub mod report;
pub mod residue_class;
pub mod scorer;
