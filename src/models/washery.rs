use super::Coordinates;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A car-wash business listing ("lava-jato").
///
/// Snapshots are fetched per query and never mutated client-side. The backend
/// sends `null` for unset fields, so every optional column decodes `null` as
/// its default and an unusable `latLong` as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Washery {
    pub id: i64,
    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "endereco", default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "telefone", default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "cnpj", default, deserialize_with = "null_as_default")]
    pub tax_id: String,
    #[serde(rename = "latLong", default, deserialize_with = "lenient_coordinates")]
    pub coordinates: Option<Coordinates>,
    #[serde(rename = "proprietarioId", default)]
    pub owner_id: Option<i64>,
    #[serde(rename = "notaMedia", default, deserialize_with = "null_as_default")]
    pub average_rating: f64,
    #[serde(rename = "totalAvaliacoes", default, deserialize_with = "null_as_default")]
    pub rating_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "tiposServico", default, deserialize_with = "null_as_default")]
    pub service_types: Vec<String>,
    #[serde(rename = "fotoPath", default, skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null`, blank or malformed coordinates become `None`.
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| {
            raw.parse::<Coordinates>()
                .inspect_err(|e| debug!("Dropping unusable latLong {:?}: {}", raw, e))
                .ok()
        }))
}

/// A service a washery offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: i64,
    #[serde(rename = "descricao", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "lavaJatoId")]
    pub washery_id: i64,
}

/// Query bag for `POST /lava-jato/filtrar`. Absent fields are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "notaMinima", skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(rename = "latLong", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Filter {
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn near(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}
