// Domain layer - Core models, no I/O
pub mod chart;
pub mod dataset;
pub mod observation;
pub mod stats;
