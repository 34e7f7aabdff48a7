//!
//! meme_overlay  -- Lulz in the pipeline
//!

#[macro_use] extern crate derive_builder;
#[macro_use] extern crate enum_derive;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate macro_attr;
#[macro_use] extern crate serde_derive;


#[cfg(test)] #[macro_use] extern crate serde_json;
#[cfg(test)] #[macro_use] extern crate spectral;


mod caption;
mod model;
mod node;
mod resources;
mod tensor;
mod util;


pub use crate::caption::*;
pub use crate::model::*;
pub use crate::node::*;
pub use crate::resources::*;
pub use crate::tensor::*;
pub use crate::util::text::{multiline_box, paint, TextBox, Typeface};
pub use crate::util::wrap::wrap;
