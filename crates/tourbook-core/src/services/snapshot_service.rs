use crate::errors::CoreError;
use crate::ports::{CatalogFetcher, SnapshotWriter};

/// Cuántos registros se escribieron de cada colección.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshReport {
  pub artists: usize,
  pub locations: usize,
  pub dates: usize,
  pub relations: usize,
}

/// Descarga el catálogo completo y lo persiste como snapshots.
pub struct SnapshotService<F, W>
where
  F: CatalogFetcher,
  W: SnapshotWriter,
{
  fetcher: F,
  writer: W,
}

impl<F, W> SnapshotService<F, W>
where
  F: CatalogFetcher,
  W: SnapshotWriter,
{
  pub fn new(fetcher: F, writer: W) -> Self {
    Self { fetcher, writer }
  }

  /// Refresca los cuatro snapshots:
  /// - descarga todas las colecciones
  /// - solo si todas llegaron bien, las escribe
  ///
  /// Si falla una descarga no se toca ningún fichero y los snapshots previos
  /// siguen sirviéndose.
  pub async fn refresh(&self) -> Result<RefreshReport, CoreError> {
    let fetch = |e: crate::ports::FetchError| CoreError::Fetch(e.to_string());

    let artists = self.fetcher.fetch_artists().await.map_err(fetch)?;
    let locations = self.fetcher.fetch_locations().await.map_err(fetch)?;
    let dates = self.fetcher.fetch_dates().await.map_err(fetch)?;
    let relations = self.fetcher.fetch_relations().await.map_err(fetch)?;

    let write = |e: crate::ports::WriteError| CoreError::Snapshot(e.to_string());

    self.writer.save_artists(&artists).map_err(write)?;
    self.writer.save_locations(&locations).map_err(write)?;
    self.writer.save_dates(&dates).map_err(write)?;
    self.writer.save_relations(&relations).map_err(write)?;

    let report = RefreshReport {
      artists: artists.len(),
      locations: locations.len(),
      dates: dates.len(),
      relations: relations.len(),
    };
    tracing::info!(?report, "catalog snapshots refreshed");

    Ok(report)
  }
}
