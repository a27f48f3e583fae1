#![doc = "sheet-bucket-core: core pipeline logic for sheet-bucket."]

//! This crate contains all domain logic for turning a remote spreadsheet into
//! a published JSON artifact: fetching and cleaning the tabular data,
//! transforming rows into fixed-shape records, deterministic artifact naming,
//! local persistence and the publish orchestration. Vendor storage SDKs stay
//! out of this crate; uploads go through the [`contract::BucketUploader`]
//! trait implemented by the binary crate.

pub mod artifact;
pub mod config;
pub mod contract;
pub mod error;
pub mod fetch;
pub mod link;
pub mod publish;
pub mod transform;
