// Middleware applied around the API routes

pub mod cors;

pub use cors::*;
