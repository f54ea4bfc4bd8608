pub mod clock;
pub mod device;
pub mod power;

pub use clock::ClockState;
pub use device::{BorderBlink, DeviceState, DeviceVisual};
pub use power::{InactivityMonitor, PowerState};
