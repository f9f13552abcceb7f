pub mod archive;
pub mod errors;
pub mod hash;
pub mod logging;
pub mod misc;
pub mod props;
