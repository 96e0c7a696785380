//! # lanscope-scan - Scan Service Client
//!
//! Talks to the external scan service. The service is a black box behind a
//! single `GET /scan` endpoint; this crate owns the HTTP request, response
//! decoding, and the mapping of every failure mode onto
//! [`lanscope_core::Error`] variants.

pub mod client;

pub use client::{decode_scan_result, ScanClient, DEFAULT_TIMEOUT};
