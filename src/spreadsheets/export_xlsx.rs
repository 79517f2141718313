use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Spreadsheet of the given listings, one row each, in the order given.
pub fn export_listings_xlsx(listings: &[&Listing], filename: &str) -> ResultResp {
    let buffer = listings_workbook(listings)?;
    xlsx_response(buffer, filename)
}

pub fn listings_workbook(listings: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    // Headers
    let headers = [
        "ID",
        "Name",
        "Type",
        "Status",
        "Email",
        "Phone",
        "Address",
        "City",
        "Submitted",
        "Last Updated",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, listing.id as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write id: {}", e)))?;

        let submitted = listing.submitted_at.format(TIMESTAMP_FORMAT).to_string();
        let updated = listing.last_updated.format(TIMESTAMP_FORMAT).to_string();
        let cells = [
            (1, "name", listing.name.as_str()),
            (2, "type", listing.kind().label()),
            (3, "status", listing.status.label()),
            (4, "email", listing.contact_email.as_str()),
            (5, "phone", listing.contact_phone.as_str()),
            (6, "address", listing.address.as_str()),
            (7, "city", listing.city.as_str()),
            (8, "submitted", submitted.as_str()),
            (9, "last updated", updated.as_str()),
        ];

        for (col, field, value) in cells {
            write_cell(worksheet, r, col, field, value)?;
        }
    }

    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    field: &str,
    value: &str,
) -> Result<(), ServerError> {
    worksheet
        .write_string(row, col, value)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write {}: {}", field, e)))?;
    Ok(())
}
