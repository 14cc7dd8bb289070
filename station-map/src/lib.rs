//! EV charging-station map server.
//!
//! Hosts a map client for a charging-station REST API: stations on a map and
//! in a list, client-side filters, a detail overlay, network statistics and
//! a GeoJSON export.

pub mod config;
pub mod domain;
pub mod gateway;
pub mod map;
pub mod render;
pub mod session;
pub mod web;
