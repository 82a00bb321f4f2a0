use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::value_objects::{ConceptKind, UnitOfMeasure, VatRateCode, VoucherKind};
use crate::domain::client::{ClientRecord, Province};
use crate::domain::tax_id::{DocumentKind, PersonKind, TaxRegime};

/// Client block of an emission request (`Cliente`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceClient {
  #[serde(rename = "Documento")]
  pub document: String,
  #[serde(rename = "TipoDocumento")]
  pub document_kind: DocumentKind,
  #[serde(rename = "Nombre")]
  pub given_name: String,
  #[serde(rename = "Apellido", default, skip_serializing_if = "Option::is_none")]
  pub family_name: Option<String>,
  #[serde(rename = "RazonSocial", default, skip_serializing_if = "Option::is_none")]
  pub legal_name: Option<String>,
  #[serde(rename = "TipoPersona")]
  pub person_kind: PersonKind,
  #[serde(rename = "CondicionImpositiva", default)]
  pub tax_regime: Option<TaxRegime>,
  #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(rename = "Telefono", default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(rename = "Domicilio", default, skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
  #[serde(rename = "Localidad", default, skip_serializing_if = "Option::is_none")]
  pub locality: Option<String>,
  #[serde(rename = "Provincia", default, skip_serializing_if = "Option::is_none")]
  pub province: Option<Province>,
  #[serde(rename = "CodigoPostal", default, skip_serializing_if = "Option::is_none")]
  pub postal_code: Option<String>,
  #[serde(rename = "Pais", default, skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,
  #[serde(rename = "Observaciones", default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

impl From<&ClientRecord> for InvoiceClient {
  fn from(record: &ClientRecord) -> Self {
    Self {
      document: record.tax_id.clone(),
      document_kind: record.tax_id_kind,
      given_name: record.given_name.clone(),
      family_name: record.family_name.clone(),
      legal_name: record.legal_name.clone(),
      person_kind: record.person_kind,
      tax_regime: Some(record.tax_regime),
      email: record.email.clone(),
      phone: record.phone.clone(),
      address: record.address.clone(),
      locality: record.locality.clone(),
      province: record.province,
      postal_code: record.postal_code.clone(),
      country: record.country.clone(),
      notes: record.notes.clone(),
    }
  }
}

/// One invoice line (`Items[]`). Amounts travel as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
  #[serde(rename = "Descripcion")]
  pub description: String,
  #[serde(rename = "Cantidad", with = "rust_decimal::serde::float")]
  pub quantity: Decimal,
  #[serde(rename = "PrecioUnitario", with = "rust_decimal::serde::float")]
  pub unit_price: Decimal,
  #[serde(rename = "Concepto", default)]
  pub concept: Option<ConceptKind>,
  #[serde(rename = "UnidadMedida", default)]
  pub unit_of_measure: Option<UnitOfMeasure>,
  #[serde(
    rename = "Bonificacion",
    default,
    with = "rust_decimal::serde::float_option",
    skip_serializing_if = "Option::is_none"
  )]
  pub discount_percent: Option<Decimal>,
  #[serde(rename = "AlicuotaIVA", default, skip_serializing_if = "Option::is_none")]
  pub vat_rate: Option<VatRateCode>,
  #[serde(rename = "Observaciones", default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

impl InvoiceLineItem {
  pub fn discount(&self) -> Decimal {
    self.discount_percent.unwrap_or(Decimal::ZERO)
  }

  /// quantity * unit price, less the line discount. `None` when the amount
  /// does not fit in a `Decimal`.
  pub fn net_amount(&self) -> Option<Decimal> {
    let gross = self.quantity.checked_mul(self.unit_price)?;
    let factor = Decimal::ONE.checked_sub(self.discount().checked_div(Decimal::ONE_HUNDRED)?)?;
    gross.checked_mul(factor)
  }
}

/// Totals derived from a set of line items.
///
/// `subtotal`, `vat_total` and `grand_total` are rounded to cents. The
/// per-rate breakdown keeps full precision so its entries add up to the
/// unrounded VAT total; use [`InvoiceTotals::rounded_breakdown`] for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceTotals {
  pub subtotal: Decimal,
  pub vat_total: Decimal,
  pub grand_total: Decimal,
  pub vat_breakdown: BTreeMap<VatRateCode, Decimal>,
}

impl InvoiceTotals {
  pub fn rounded_breakdown(&self) -> BTreeMap<VatRateCode, Decimal> {
    self
      .vat_breakdown
      .iter()
      .map(|(code, amount)| (*code, round_currency(*amount)))
      .collect()
  }
}

pub fn round_currency(amount: Decimal) -> Decimal {
  amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Payload for `EmitirFactura`, minus the credentials block the gateway
/// adapter adds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRequest {
  #[serde(rename = "TipoComprobante")]
  pub voucher_kind: VoucherKind,
  #[serde(rename = "PuntoVenta")]
  pub sales_point: u32,
  #[serde(rename = "FechaComprobante")]
  pub issue_date: NaiveDate,
  #[serde(rename = "FechaServicioDesde", default, skip_serializing_if = "Option::is_none")]
  pub service_from: Option<NaiveDate>,
  #[serde(rename = "FechaServicioHasta", default, skip_serializing_if = "Option::is_none")]
  pub service_to: Option<NaiveDate>,
  #[serde(rename = "FechaVencimientoPago", default, skip_serializing_if = "Option::is_none")]
  pub payment_due: Option<NaiveDate>,
  #[serde(rename = "Cliente")]
  pub client: InvoiceClient,
  #[serde(rename = "Items")]
  pub items: Vec<InvoiceLineItem>,
  #[serde(rename = "Leyenda", default, skip_serializing_if = "Option::is_none")]
  pub legend: Option<String>,
  #[serde(rename = "OrdenPago", default, skip_serializing_if = "Option::is_none")]
  pub payment_order: Option<String>,
  #[serde(rename = "MensajeInicial", default, skip_serializing_if = "Option::is_none")]
  pub initial_message: Option<String>,
  #[serde(rename = "Remito", default, skip_serializing_if = "Option::is_none")]
  pub delivery_note: Option<String>,
  #[serde(rename = "AutoEnvioCorreo", default, skip_serializing_if = "Option::is_none")]
  pub auto_email: Option<bool>,
  #[serde(
    rename = "HashComprobanteRelacionado",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub related_voucher: Option<String>,
}

/// Envelope every emission gateway call answers with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GatewayResponse<T> {
  pub success: bool,
  pub message: Option<String>,
  pub data: Option<T>,
}

/// Authorized voucher data returned on emission or lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmittedVoucher {
  #[serde(rename = "Hash")]
  pub hash: String,
  #[serde(rename = "CAE")]
  pub authorization_code: String,
  #[serde(rename = "FechaVencimientoCAE")]
  pub authorization_expiry: String,
  /// Zero-padded voucher number; some gateway versions send it as a bare
  /// integer.
  #[serde(rename = "NumeroComprobante", deserialize_with = "string_or_number")]
  pub number: String,
  #[serde(rename = "PuntoVenta")]
  pub sales_point: u32,
  #[serde(rename = "TipoComprobante")]
  pub voucher_kind: VoucherKind,
  #[serde(rename = "PDF", default, skip_serializing_if = "Option::is_none")]
  pub pdf_base64: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Text(String),
    Number(u64),
  }

  Ok(match Raw::deserialize(deserializer)? {
    Raw::Text(text) => text,
    Raw::Number(number) => number.to_string(),
  })
}

impl EmittedVoucher {
  pub fn pdf_bytes(&self) -> Result<Option<Vec<u8>>, base64::DecodeError> {
    self
      .pdf_base64
      .as_deref()
      .map(|encoded| STANDARD.decode(encoded))
      .transpose()
  }
}
