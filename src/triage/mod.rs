pub mod controller;

pub use controller::TriageController;
