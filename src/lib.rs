#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use lookup_reflect as reflect;
pub use lookup_utils as utils;

pub use lookup_reflect::access::{LookupError, Options, ReflectLookup, Resolved, lookup};
