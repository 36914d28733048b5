//! NourishAI — personalized nutrition advisor.

pub mod advisor;
pub mod config;
pub mod error;
pub mod llm;
pub mod search;
pub mod web;
