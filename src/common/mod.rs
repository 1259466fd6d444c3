mod fs;
mod geog;
mod io;

pub use fs::write_image;
pub use geog::State;
pub(crate) use io::*;
