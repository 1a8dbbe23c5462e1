use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a notification banner. Governs visual treatment only.
///
/// Serialized tags are lowercase on purpose: they double as the CSS
/// class vocabulary (`notification-success`, `notification-error`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    /// Modifier class carried by the banner element.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
            Severity::Warning => "notification-warning",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

/// A transient status banner. Owned by the notification host once
/// created; nothing else references it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Whether a movement debits or credits the account. Rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Debit,
    Credit,
}

impl MovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Debit => "debit",
            MovementKind::Credit => "credit",
        }
    }
}

/// One row of the account movements table, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountMovement {
    /// Display timestamp, e.g. "09/02/2026 14:35"
    pub date: String,
    pub concept: String,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    /// Signed display amount, e.g. "-$500.00"
    pub amount: String,
    /// Balance after the movement, e.g. "$5,850.00"
    pub balance: String,
}

/// Demo account movements. Static illustration data; a real deployment
/// would fetch the history from a backend.
pub fn sample_movements() -> Vec<AccountMovement> {
    vec![
        AccountMovement {
            date: "09/02/2026 14:35".to_string(),
            concept: "Transferencia a Carlos López".to_string(),
            kind: MovementKind::Debit,
            amount: "-$500.00".to_string(),
            balance: "$5,850.00".to_string(),
        },
        AccountMovement {
            date: "08/02/2026 10:15".to_string(),
            concept: "Depósito de nómina".to_string(),
            kind: MovementKind::Credit,
            amount: "+$3,200.00".to_string(),
            balance: "$6,350.00".to_string(),
        },
    ]
}

/// Field values read from the transfer form at submission time.
/// Lives for one submission only; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_account: String,
    pub recipient: String,
    pub account_number: String,
    /// Raw field text; parsed during validation.
    pub amount: String,
    /// Optional free-text concept; not required.
    pub concept: String,
}

/// Why a transfer submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferValidationError {
    MissingRequiredFields,
    AmountNotPositive,
}

impl fmt::Display for TransferValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferValidationError::MissingRequiredFields => {
                write!(f, "Por favor, completa todos los campos requeridos")
            }
            TransferValidationError::AmountNotPositive => {
                write!(f, "El monto debe ser mayor a 0")
            }
        }
    }
}

impl std::error::Error for TransferValidationError {}

/// Validate a transfer request and return the parsed amount.
///
/// Checks run in order: presence of the four required fields first
/// (concept is optional), then that the amount parses and is strictly
/// greater than zero. Non-numeric amounts fail the second check, as
/// does the literal "NaN" the amount guard writes back.
pub fn validate_transfer(request: &TransferRequest) -> Result<f64, TransferValidationError> {
    if request.from_account.is_empty()
        || request.recipient.is_empty()
        || request.account_number.is_empty()
        || request.amount.is_empty()
    {
        return Err(TransferValidationError::MissingRequiredFields);
    }

    let amount = request
        .amount
        .trim()
        .parse::<f64>()
        .map_err(|_| TransferValidationError::AmountNotPositive)?;

    // NaN parses Ok but fails this comparison, so it is rejected too.
    if !(amount > 0.0) {
        return Err(TransferValidationError::AmountNotPositive);
    }

    Ok(amount)
}

/// Success banner text for an accepted transfer. Interpolates the raw
/// amount string the user typed, not the parsed value.
pub fn transfer_success_message(amount: &str, recipient: &str) -> String {
    format!(
        "Transferencia de ${} a {} realizada exitosamente",
        amount, recipient
    )
}

/// Fixed CSV header for the movements export.
pub const CSV_HEADER: &str = "Fecha,Concepto,Tipo,Monto,Saldo";

/// Filename handed to the browser download.
pub const CSV_FILENAME: &str = "transacciones.csv";

/// Render table rows as CSV text: the fixed header, then one line per
/// row with each cell trimmed and wrapped in double quotes.
///
/// Escaping is wrapping only. Embedded quotes or commas inside a cell
/// pass through untouched; the original export behaves the same way
/// and the format is pinned to it.
pub fn render_transactions_csv(rows: &[Vec<String>]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for row in rows {
        let line = row
            .iter()
            .map(|cell| format!("\"{}\"", cell.trim()))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

/// Keep only decimal digits and hyphens. The account number field is
/// rewritten with this on every input event.
pub fn sanitize_account_number(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Rewrite the amount field to two decimal places on change.
///
/// Unparsable input becomes the literal "NaN", mirroring the original's
/// `parseFloat(...).toFixed(2)` quirk. One deviation: Rust's strict
/// parse also sends mixed strings like "5abc" here, where JS would
/// prefix-parse them to "5.00".
pub fn format_amount_input(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(amount) => format!("{:.2}", amount),
        Err(_) => "NaN".to_string(),
    }
}

const WEEKDAYS_ES: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Fixed es-ES long format for the header clock, e.g.
/// "lunes, 9 de febrero de 2026, 14:35:23".
///
/// `weekday` is 0 = Sunday (the JS `getDay` convention), `month` is
/// 1-based. Out-of-range indexes fall back to the first entry rather
/// than panicking.
pub fn format_datetime_es(
    weekday: u32,
    day: u32,
    month: u32,
    year: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
) -> String {
    let weekday_name = WEEKDAYS_ES
        .get(weekday as usize)
        .copied()
        .unwrap_or(WEEKDAYS_ES[0]);
    let month_name = MONTHS_ES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or(MONTHS_ES[0]);

    format!(
        "{}, {} de {} de {}, {:02}:{:02}:{:02}",
        weekday_name, day, month_name, year, hours, minutes, seconds
    )
}

const MOBILE_UA_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Case-insensitive check for common mobile platform tokens in a
/// browser user-agent string. Pure predicate; the caller decides what
/// to do with a match.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_UA_TOKENS.iter().any(|token| ua.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_request() -> TransferRequest {
        TransferRequest {
            from_account: "savings".to_string(),
            recipient: "Carlos López".to_string(),
            account_number: "1234-5678".to_string(),
            amount: "500".to_string(),
            concept: "Renta".to_string(),
        }
    }

    #[test]
    fn test_validate_transfer_accepts_valid_request() {
        let amount = validate_transfer(&filled_request()).unwrap();
        assert_eq!(amount, 500.0);
    }

    #[test]
    fn test_validate_transfer_concept_is_optional() {
        let mut request = filled_request();
        request.concept = String::new();
        assert!(validate_transfer(&request).is_ok());
    }

    #[test]
    fn test_validate_transfer_requires_all_required_fields() {
        for clear in [
            (|r: &mut TransferRequest| r.from_account.clear()) as fn(&mut TransferRequest),
            |r: &mut TransferRequest| r.recipient.clear(),
            |r: &mut TransferRequest| r.account_number.clear(),
            |r: &mut TransferRequest| r.amount.clear(),
        ] {
            let mut request = filled_request();
            clear(&mut request);
            assert_eq!(
                validate_transfer(&request),
                Err(TransferValidationError::MissingRequiredFields)
            );
        }
    }

    #[test]
    fn test_validate_transfer_rejects_non_positive_amounts() {
        for amount in ["0", "-5", "0.00", "abc", "NaN"] {
            let mut request = filled_request();
            request.amount = amount.to_string();
            assert_eq!(
                validate_transfer(&request),
                Err(TransferValidationError::AmountNotPositive),
                "amount {:?} should be rejected",
                amount
            );
        }
    }

    #[test]
    fn test_validate_transfer_missing_fields_checked_before_amount() {
        let mut request = filled_request();
        request.recipient.clear();
        request.amount = "-5".to_string();
        assert_eq!(
            validate_transfer(&request),
            Err(TransferValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            TransferValidationError::MissingRequiredFields.to_string(),
            "Por favor, completa todos los campos requeridos"
        );
        assert_eq!(
            TransferValidationError::AmountNotPositive.to_string(),
            "El monto debe ser mayor a 0"
        );
    }

    #[test]
    fn test_transfer_success_message_contains_amount_and_recipient() {
        let message = transfer_success_message("500", "Carlos López");
        assert_eq!(
            message,
            "Transferencia de $500 a Carlos López realizada exitosamente"
        );
    }

    #[test]
    fn test_csv_single_row_exact_output() {
        let rows = vec![vec![
            "09/02/2026 14:35".to_string(),
            "Transferencia a Carlos López".to_string(),
            "debit".to_string(),
            "-$500.00".to_string(),
            "$5,850.00".to_string(),
        ]];
        assert_eq!(
            render_transactions_csv(&rows),
            "Fecha,Concepto,Tipo,Monto,Saldo\n\"09/02/2026 14:35\",\"Transferencia a Carlos López\",\"debit\",\"-$500.00\",\"$5,850.00\"\n"
        );
    }

    #[test]
    fn test_csv_is_idempotent_for_unchanged_rows() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];
        assert_eq!(
            render_transactions_csv(&rows),
            render_transactions_csv(&rows)
        );
    }

    #[test]
    fn test_csv_trims_cells_and_keeps_embedded_commas_unescaped() {
        let rows = vec![vec!["  padded  ".to_string(), "a, b".to_string()]];
        assert_eq!(
            render_transactions_csv(&rows),
            "Fecha,Concepto,Tipo,Monto,Saldo\n\"padded\",\"a, b\"\n"
        );
    }

    #[test]
    fn test_csv_empty_table_is_header_only() {
        assert_eq!(
            render_transactions_csv(&[]),
            "Fecha,Concepto,Tipo,Monto,Saldo\n"
        );
    }

    #[test]
    fn test_sanitize_account_number_strips_non_digit_non_hyphen() {
        assert_eq!(sanitize_account_number("12a-34b"), "12-34");
        assert_eq!(sanitize_account_number("1234-5678"), "1234-5678");
        assert_eq!(sanitize_account_number("no digits"), "");
        assert_eq!(sanitize_account_number("12 34·56"), "123456");
    }

    #[test]
    fn test_format_amount_input_two_decimals() {
        assert_eq!(format_amount_input("5"), "5.00");
        assert_eq!(format_amount_input("3.1"), "3.10");
        assert_eq!(format_amount_input(" 7 "), "7.00");
        assert_eq!(format_amount_input("-2.5"), "-2.50");
    }

    #[test]
    fn test_format_amount_input_non_numeric_becomes_nan_literal() {
        assert_eq!(format_amount_input("abc"), "NaN");
        assert_eq!(format_amount_input(""), "NaN");
    }

    #[test]
    fn test_format_datetime_es() {
        // 2026-02-09 was a Monday.
        assert_eq!(
            format_datetime_es(1, 9, 2, 2026, 14, 35, 23),
            "lunes, 9 de febrero de 2026, 14:35:23"
        );
    }

    #[test]
    fn test_format_datetime_es_pads_time_components() {
        assert_eq!(
            format_datetime_es(0, 1, 1, 2026, 8, 5, 9),
            "domingo, 1 de enero de 2026, 08:05:09"
        );
    }

    #[test]
    fn test_format_datetime_es_out_of_range_falls_back() {
        let formatted = format_datetime_es(9, 1, 13, 2026, 0, 0, 0);
        assert!(formatted.starts_with("domingo, 1 de enero"));
    }

    #[test]
    fn test_is_mobile_user_agent() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; ANDROID 14)"));
        assert!(is_mobile_user_agent(
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"
        ));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36"
        ));
    }

    #[test]
    fn test_severity_tags_match_css_vocabulary() {
        assert_eq!(
            serde_json::to_string(&Severity::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(Severity::Error.css_class(), "notification-error");
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_sample_movements_match_demo_table() {
        let movements = sample_movements();
        assert_eq!(movements.len(), 2);
        assert_eq!(movements[0].date, "09/02/2026 14:35");
        assert_eq!(movements[0].kind.label(), "debit");
        assert_eq!(movements[0].amount, "-$500.00");
        assert_eq!(movements[1].concept, "Depósito de nómina");
        assert_eq!(movements[1].kind, MovementKind::Credit);
        assert_eq!(movements[1].balance, "$6,350.00");
    }
}
