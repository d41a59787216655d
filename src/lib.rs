#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use sift_json as json;
pub use sift_reflect as reflect;
pub use sift_utils as utils;

pub use sift_json::{JsonSerializer, SerializeContext};
pub use sift_reflect::Reflect;
