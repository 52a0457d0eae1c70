pub mod application;
pub mod http;
pub mod postgres;
pub mod read_model;
