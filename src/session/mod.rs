//! 会话状态机：分析会话的纯状态转换。
//!
//! Analysis session state machine.
//!
//! Implements the Elm Architecture pattern: [`transition`] is a pure reducer that takes
//! the current [`AnalysisSession`] and an [`Event`] and returns the [`Effect`] the driver
//! must carry out. The only effect that leaves the process is [`Effect::Dispatch`].
//!
//! ```text
//! Idle ──Submit──▶ Validating ──ok──▶ Submitting ──Completed──▶ Succeeded
//!   ▲                  │                   │                       │
//!   │                  └──invalid──▶ Failed ◀──────error───────────┘ (via Submit)
//!   └──────────────Reset────────────────┘
//! ```

mod effect;
mod event;
mod state;
mod transition;

pub use effect::Effect;
pub use event::Event;
pub use state::{AnalysisSession, SessionStatus};
pub use transition::transition;
