pub mod demo;
pub mod show;

pub use demo::run_demo;
pub use show::show_festivals;
