#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod decode;
mod pair;
mod pairs;
mod params;
mod parser;
mod query_map;

pub use self::{
    pair::Pair,
    pairs::Pairs,
    params::Params,
    parser::{parse, parse_into},
    query_map::QueryMap,
};

#[cfg(feature = "http")]
mod http_ext;

#[cfg(feature = "http")]
pub use http_ext::*;
