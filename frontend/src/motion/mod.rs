//! DOM-free animation math and state. The hooks feed browser measurements in
//! and turn the results into inline styles.

pub mod counter;
pub mod easing;
pub mod error;
pub mod marquee;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod split;
pub mod subscription;
pub mod text_fx;
pub mod visibility;

pub use error::MotionError;
pub use subscription::{MountFlag, Subscription};
