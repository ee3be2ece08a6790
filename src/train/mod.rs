pub mod gd_config;
pub mod train_report;
pub mod gradient_descent;

pub use gd_config::GdConfig;
pub use train_report::TrainReport;
pub use gradient_descent::train_neuron;
