pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod services;
