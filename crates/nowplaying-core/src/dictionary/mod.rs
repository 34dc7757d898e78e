//! Dictionary module: the typed value tree and the lenient text decoder.

pub mod decode;
pub mod value;

pub use decode::{decode, decode_with, DecodeOptions};
pub use value::{DictValue, Dictionary};
