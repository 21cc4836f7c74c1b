pub mod chord;
pub mod kinds;
pub mod play;
