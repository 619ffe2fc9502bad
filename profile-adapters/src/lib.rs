//! Model adapters used to reach the LLM validator.
//!
//! The [`traits`] module defines the provider-neutral request and adapter
//! interface; [`openai`] implements it for `OpenAI`-compatible endpoints.

#![warn(missing_docs, clippy::pedantic)]

pub mod openai;
pub mod traits;

mod http_client;
