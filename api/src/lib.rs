// Library exports for testing and external use

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
