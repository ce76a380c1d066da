pub mod path;
pub mod rig;

pub use path::CameraPath;
pub use rig::{CameraMove, CameraRig};
