pub mod clean;
pub mod shuffle;

pub use clean::{clean, RawRecord, Sample};
pub use shuffle::shuffle;
