// Composition root.
//
// - `config` reads the process environment.
// - `state` wires the document store into every use case handler.
// - `http` mounts the use case routes under `/api`.

pub mod config;
pub mod http;
pub mod state;
