use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info_span, Instrument};

use crate::core::{AppError, Result};
use crate::middleware::RequestIdValue;
use crate::modules::vat_return::models::{VatReturnFilter, VatReturnReport};
use crate::modules::vat_return::repositories::VatReturnRepository;
use crate::modules::vat_return::services::VatReturnService;

/// Query parameters for the VAT 201 endpoint; empty values mean "not set"
#[derive(Debug, Default, Deserialize)]
pub struct VatReturnQuery {
    #[serde(default)]
    pub company: Option<String>,
    /// Format: YYYY-MM-DD
    #[serde(default)]
    pub from_date: Option<String>,
    /// Format: YYYY-MM-DD
    #[serde(default)]
    pub to_date: Option<String>,
}

impl VatReturnQuery {
    pub fn into_filter(self) -> Result<VatReturnFilter> {
        Ok(VatReturnFilter {
            company: self.company.filter(|company| !company.is_empty()),
            from_date: parse_date("from_date", self.from_date)?,
            to_date: parse_date("to_date", self.to_date)?,
        })
    }
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                AppError::validation(format!(
                    "Invalid {} format: '{}'. Expected YYYY-MM-DD",
                    field, raw
                ))
            })
        })
        .transpose()
}

/// GET /reports/uae-vat-201
///
/// Returns columns, rows, message and chart of the UAE VAT 201 return.
pub async fn get_vat_return(
    req: HttpRequest,
    repository: web::Data<dyn VatReturnRepository>,
    query: web::Query<VatReturnQuery>,
) -> HttpResponse {
    let request_id = RequestIdValue::current(&req)
        .map(|id| id.0)
        .unwrap_or_default();
    let span = info_span!("vat_return_report", request_id = %request_id);

    match handle_get_vat_return(repository, query.into_inner())
        .instrument(span)
        .await
    {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            error!(request_id = %request_id, "Failed to generate UAE VAT 201 report: {}", e);
            e.error_response()
        }
    }
}

async fn handle_get_vat_return(
    repository: web::Data<dyn VatReturnRepository>,
    query: VatReturnQuery,
) -> Result<VatReturnReport> {
    let filter = query.into_filter()?;
    let service = VatReturnService::new(repository.into_inner());
    service.execute(&filter).await
}

/// Configure routes for the VAT return module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/reports").route("/uae-vat-201", web::get().to(get_vat_return)));
}
