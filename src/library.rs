//! Track catalog: lists the audio directory and derives playable `Track`s.
//!
//! The catalog is the ordered set of tracks available in the current
//! session. Listing failures degrade to an empty catalog.

mod model;
mod scan;
mod title;

pub use model::*;
pub use scan::scan;
pub use title::title_from_file_name;
