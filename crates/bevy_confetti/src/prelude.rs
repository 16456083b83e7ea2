pub use crate::ConfettiPlugin;

pub use crate::burst::{Confetti, ConfettiBurst, ConfettiContainer, ConfettiOverlay};
pub use crate::config::{ConfettiConfig, ConfettiConfigHandle};
pub use crate::input::ConfettiShortcut;
pub use crate::piece::{ConfettiPiece, StartCorner};
pub use crate::sampling::ConfettiRng;
