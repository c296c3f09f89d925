pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod logging;
pub mod service;
pub mod worker;
