pub mod histogram;
pub mod roll;
pub mod seed;
pub mod shuffle;
pub mod version;
