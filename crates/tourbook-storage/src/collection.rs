use std::fmt;

/// Las cuatro colecciones del catálogo y el fichero de snapshot de cada una.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
  Artists,
  Locations,
  Dates,
  Relations,
}

impl Collection {
  pub const ALL: [Collection; 4] =
    [Collection::Artists, Collection::Locations, Collection::Dates, Collection::Relations];

  pub const fn name(self) -> &'static str {
    match self {
      Collection::Artists => "artists",
      Collection::Locations => "locations",
      Collection::Dates => "dates",
      Collection::Relations => "relations",
    }
  }

  pub fn file_name(self) -> String {
    format!("{}.json", self.name())
  }
}

impl fmt::Display for Collection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
