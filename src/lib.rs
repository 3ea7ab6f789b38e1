// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod controller;
pub mod corpus;
pub mod help;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod store;
