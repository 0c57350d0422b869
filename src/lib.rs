pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod script;
pub mod store;
pub mod subtotal;
// cmd and reports are binary modules (in main.rs); the library only
// carries the state machine, its config and the script loader.
