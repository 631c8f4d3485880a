//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod console_rx;
pub mod console_tx;
pub mod control;
pub mod ignitor;
pub mod pot;
pub mod settings;

pub use button::button_task;
pub use console_rx::console_rx_task;
pub use console_tx::console_tx_task;
pub use control::{control_task, FireballBurst};
pub use ignitor::{ignitor_task, SignalIgnitor};
pub use pot::pot_task;
pub use settings::settings_task;
