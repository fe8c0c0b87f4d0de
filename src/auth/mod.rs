pub mod authenticator;
pub mod extractor;
pub mod policy;

pub use authenticator::authenticate;
pub use policy::{authorize, Action, Scope};
