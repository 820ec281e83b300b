pub mod declaration;
pub mod diagnostic;
pub mod location;
pub mod marker;

pub use declaration::*;
pub use diagnostic::*;
pub use location::*;
pub use marker::*;
