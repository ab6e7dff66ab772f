//! A small message board: create and list messages over HTTP as JSON or
//! HTML, backed by Postgres or an in-memory store.

pub mod config;
pub mod databases;
pub mod error;
pub mod negotiate;
pub mod routes;
pub mod views;
