pub mod config_ops;
pub mod data_ops;
pub mod detect_ops;
