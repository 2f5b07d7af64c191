mod gate;
mod handoff;
mod session;

pub use gate::{OperationGate, OperationPermit};
pub use handoff::{CodeHandoff, CodeSender, code_handoff};
pub use session::SessionStore;
