//! Module integrating the text overlay as a node of the host's image pipeline.

mod error;
mod host;
mod inputs;
mod maker;
mod schema;


pub use self::error::NodeError;
pub use self::host::Host;
pub use self::inputs::NodeInputs;
pub use self::maker::MemeMaker;
pub use self::schema::{InputSpec, InputType, InputTypes};


/// Name the node is registered under in the host.
pub const NODE_CLASS_NAME: &'static str = "MemeMaker";
/// Human-readable name of the node.
pub const NODE_DISPLAY_NAME: &'static str = "Meme Maker - fonts autoread in inputs folder";
/// Category the node is listed under.
pub const NODE_CATEGORY: &'static str = "Image Processing";
/// Types of the node's outputs, in order.
pub const NODE_RETURN_TYPES: &'static [&'static str] = &["IMAGE", "MASK"];
/// Name of the node's entry point.
pub const NODE_FUNCTION: &'static str = "execute";
