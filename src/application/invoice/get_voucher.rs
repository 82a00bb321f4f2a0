use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::emit_invoice::VoucherDto;
use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct GetVoucherCommand {
  pub hash: String,
}

#[derive(Debug, Serialize)]
pub struct GetVoucherResponse {
  pub voucher: VoucherDto,
}

pub struct GetVoucherUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetVoucherUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: GetVoucherCommand) -> Result<GetVoucherResponse, InvoiceError> {
    let voucher = self.invoice_service.fetch_voucher(&command.hash).await?;
    Ok(GetVoucherResponse {
      voucher: voucher.into(),
    })
  }
}
