pub mod event;
pub mod film;
pub mod language;
pub mod rate;

pub use event::Event;
pub use film::{Film, FilmInput};
pub use language::Language;
pub use rate::Rate;
