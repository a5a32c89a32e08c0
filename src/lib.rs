//! Measure how often streamers and chat say "pog" in video transcripts
//!
//! Captions are normalized, split into words (gluing spelled-out letters like
//! `p o g` back together), matched against keyword patterns and summarized as
//! density and rate per minute. The included binaries are thin wrappers.


#[macro_use] extern crate log;
extern crate chrono;
extern crate farmhash;
extern crate nom;
extern crate rayon;
extern crate regex;
#[cfg(test)] extern crate tempfile;
pub mod errors;
pub mod farm;
pub mod normalize;
pub mod combine;
pub mod keywords;
pub mod stats;
pub mod metadata;
pub mod transcript;
pub mod corpus;
pub mod report;
