pub mod artist;
pub mod ids;
pub mod records;

pub use artist::Artist;
pub use ids::{ArtistId, ParseArtistIdError};
pub use records::{Annexed, DateRecord, Indexed, LocationRecord, RelationRecord};
