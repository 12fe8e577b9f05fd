// ============================================================================
// PROJECT PROPOSAL REVIEW PORTAL - Yew front end
// ============================================================================
// - models: wire types shared with the backend
// - services: REST gateways (HTTP only)
// - stores: session persisted in localStorage
// - viewmodels: pure state machines + async effects over the gateways
// - hooks: Yew glue (reducers, context, request tracking)
// - routes / components / views: guard, widgets, pages
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;
