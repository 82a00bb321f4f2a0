use serde::{Deserialize, Serialize};

use crate::domain::tax_id::UnknownCode;

// Province - codes used by the invoice emission API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Province {
  Caba,
  BuenosAires,
  Catamarca,
  Cordoba,
  Corrientes,
  EntreRios,
  Jujuy,
  Mendoza,
  LaRioja,
  Salta,
  SanJuan,
  SanLuis,
  SantaFe,
  SantiagoDelEstero,
  Tucuman,
  Chaco,
  Chubut,
  Formosa,
  Misiones,
  Neuquen,
  LaPampa,
  RioNegro,
  SantaCruz,
  TierraDelFuego,
}

const PROVINCES: [Province; 24] = [
  Province::Caba,
  Province::BuenosAires,
  Province::Catamarca,
  Province::Cordoba,
  Province::Corrientes,
  Province::EntreRios,
  Province::Jujuy,
  Province::Mendoza,
  Province::LaRioja,
  Province::Salta,
  Province::SanJuan,
  Province::SanLuis,
  Province::SantaFe,
  Province::SantiagoDelEstero,
  Province::Tucuman,
  Province::Chaco,
  Province::Chubut,
  Province::Formosa,
  Province::Misiones,
  Province::Neuquen,
  Province::LaPampa,
  Province::RioNegro,
  Province::SantaCruz,
  Province::TierraDelFuego,
];

impl Province {
  /// Codes run 1..=24 in table order.
  pub fn code(&self) -> u8 {
    PROVINCES
      .iter()
      .position(|p| p == self)
      .map(|index| index as u8 + 1)
      .unwrap_or_default()
  }

  pub fn from_code(code: u8) -> Option<Self> {
    let index = usize::from(code).checked_sub(1)?;
    PROVINCES.get(index).copied()
  }

  pub fn name(&self) -> &'static str {
    match self {
      Province::Caba => "Ciudad Autónoma de Buenos Aires",
      Province::BuenosAires => "Buenos Aires",
      Province::Catamarca => "Catamarca",
      Province::Cordoba => "Córdoba",
      Province::Corrientes => "Corrientes",
      Province::EntreRios => "Entre Ríos",
      Province::Jujuy => "Jujuy",
      Province::Mendoza => "Mendoza",
      Province::LaRioja => "La Rioja",
      Province::Salta => "Salta",
      Province::SanJuan => "San Juan",
      Province::SanLuis => "San Luis",
      Province::SantaFe => "Santa Fe",
      Province::SantiagoDelEstero => "Santiago del Estero",
      Province::Tucuman => "Tucumán",
      Province::Chaco => "Chaco",
      Province::Chubut => "Chubut",
      Province::Formosa => "Formosa",
      Province::Misiones => "Misiones",
      Province::Neuquen => "Neuquén",
      Province::LaPampa => "La Pampa",
      Province::RioNegro => "Río Negro",
      Province::SantaCruz => "Santa Cruz",
      Province::TierraDelFuego => "Tierra del Fuego",
    }
  }

  /// Matches a province name as returned by the tax authority, ignoring
  /// case and accents.
  pub fn from_label(label: &str) -> Option<Self> {
    let wanted = fold(label);
    if wanted.is_empty() {
      return None;
    }
    if wanted == "caba" || wanted == "capital federal" {
      return Some(Province::Caba);
    }
    PROVINCES
      .iter()
      .copied()
      .find(|province| fold(province.name()) == wanted)
  }
}

fn fold(value: &str) -> String {
  value
    .trim()
    .to_lowercase()
    .chars()
    .map(|c| match c {
      'á' => 'a',
      'é' => 'e',
      'í' => 'i',
      'ó' => 'o',
      'ú' | 'ü' => 'u',
      other => other,
    })
    .collect()
}

impl TryFrom<u8> for Province {
  type Error = UnknownCode;

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    Self::from_code(code).ok_or(UnknownCode {
      kind: "province",
      code,
    })
  }
}

impl From<Province> for u8 {
  fn from(value: Province) -> Self {
    value.code()
  }
}
