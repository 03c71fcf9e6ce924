//! Core library exports for the video collector service.
//!
//! This crate exposes the domain model, repositories, forms, routes and
//! service layers used by the video cataloging web application. The `data`
//! feature builds only the persistence/domain layer; the default `server`
//! feature adds the Actix-web application on top.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
