#![allow(dead_code)]

pub mod gated_store;
pub mod session;
