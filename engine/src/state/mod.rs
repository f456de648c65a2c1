pub mod session;

pub use session::{CalculatorSession, SessionPhase};
