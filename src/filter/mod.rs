//! Line matching
//!
//! A line is printed when it passes two checks, in order:
//!
//! ```text
//! 1. candidate   LEVEL in line            (level uppercased, line untouched)
//!                or text in line          (both lowercased)
//! 2. narrowing   filter == ""             every candidate
//!                filter in line           case-sensitive
//! ```
//!
//! An unset text or filter is compared as the literal `None`, so an unset
//! filter only lets through candidates that contain that word.
//!
//! # Examples
//!
//! ```text
//! --lvl error --filter ""        lines containing ERROR or the word none
//! --text timeout --filter ""     INFO lines and any line mentioning timeout
//! --lvl warn --filter Pathfinder WARN lines from the pathfinder
//! ```

pub mod matcher;

pub use matcher::LineFilter;
