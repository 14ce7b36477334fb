//! Operaciones puras sobre colecciones ya decodificadas.
//!
//! Ninguna falla ni guarda estado: se pueden probar con fixtures en memoria.

use std::collections::HashMap;

use crate::domain::{Annexed, Artist, ArtistId};

/// Asigna a cada registro anexo el nombre del artista con su mismo id.
///
/// El mapa id → nombre se construye en una sola pasada; con ids repetidos
/// gana el último. Los registros sin artista quedan con nombre vacío. Conserva
/// orden y cantidad, y aplicarlo dos veces da lo mismo que una.
pub fn join_names<R: Annexed>(mut records: Vec<R>, artists: &[Artist]) -> Vec<R> {
  let names: HashMap<ArtistId, &str> =
    artists.iter().map(|artist| (artist.id, artist.name.as_str())).collect();

  for record in &mut records {
    let name = names.get(&record.artist_id()).copied().unwrap_or_default();
    record.set_name(name.to_owned());
  }

  records
}

/// Devuelve el contenido del primer registro cuyo id coincide.
///
/// `None` es el caso "sin datos para ese artista", no un fallo de carga.
pub fn project_for_artist<R: Annexed>(id: ArtistId, records: &[R]) -> Option<&R::Payload> {
  records.iter().find(|record| record.artist_id() == id).map(R::payload)
}

/// Filtra artistas cuyo nombre contiene `query`, sin distinguir mayúsculas.
///
/// Ambos lados se comparan plegados (ver [`fold_case`]), así que `"ß"` y
/// `"SS"` encuentran a "Straße". Una consulta vacía devuelve todos. El
/// resultado respeta el orden de entrada.
pub fn search(artists: &[Artist], query: &str) -> Vec<Artist> {
  let needle = fold_case(query);

  artists.iter().filter(|artist| fold_case(&artist.name).contains(&needle)).cloned().collect()
}

/// Mayúsculas y después plegado Unicode completo.
///
/// El plegado solo no iguala `ı` con `I`; pasar antes por mayúsculas hace que
/// `fold_case(s) == fold_case(&s.to_uppercase())` para cualquier `s`.
fn fold_case(text: &str) -> String {
  caseless::default_case_fold_str(&text.to_uppercase())
}

/// Primer artista con el id dado. No usa ningún id centinela: un artista con
/// id `0` se encuentra como cualquier otro.
pub fn find_artist(artists: &[Artist], id: ArtistId) -> Option<&Artist> {
  artists.iter().find(|artist| artist.id == id)
}
