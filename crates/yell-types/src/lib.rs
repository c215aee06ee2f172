pub mod caller;
pub mod frame;
pub mod value;

pub use caller::CallerState;
pub use frame::Frame;
pub use value::{CustomValue, Value};
