//! 扫描结果的可视化辅助
//!
//! 只消费扫描器的输出，扫描器不依赖本模块。

pub mod automaton;
pub mod state_map;
pub mod stepper;

pub use automaton::{Automaton, Transition};
pub use state_map::{DfaState, StateMap};
pub use stepper::{Step, Stepper};
