pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod shutdown;
pub mod ui;
pub mod ussd;
