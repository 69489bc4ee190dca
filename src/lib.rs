#![warn(missing_docs, clippy::pedantic, clippy::perf)]
#![doc = include_str!(r"../README.md")]

pub mod api;
pub mod avatar;
pub mod pager;
pub mod presence;
