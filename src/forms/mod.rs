//! Form structs deserialized from HTTP requests and their typed payloads.

pub mod videos;
