//! Render engine: response payload → results view model.

use mklookup_types::{CustomerRecord, SapStatus, SearchResponse, display_value};
use serde::Serialize;

use crate::labels::{is_highlighted, label_for};
use crate::status::Severity;

pub const NO_DATA: &str = "No customer data available";
pub const BADGE_NOT_FOUND: &str = "Not Found";
pub const BADGE_SESSION_EXPIRED: &str = "Session Expired";
pub const SESSION_EXPIRED_WARNING: &str = "SAP session expired. Refresh the SAP session credentials on the lookup server, then search again.";

/// One labeled field in the details panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub key: String,
    pub label: String,
    pub value: String,
    pub highlighted: bool,
    /// Current position in the details panel.
    pub order: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SapBadge {
    pub text: String,
    pub level: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "rows")]
pub enum Details {
    Rows(Vec<RenderedRow>),
    NoData,
}

impl Details {
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            Details::Rows(rows) => rows,
            Details::NoData => &[],
        }
    }
}

/// Everything shown in the results panel after a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub badge: SapBadge,
    pub generate_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_warning: Option<String>,
    pub details: Details,
}

impl ResultsView {
    pub fn from_response(response: &SearchResponse) -> Self {
        render(
            response.record().as_ref(),
            response.sap_code(),
            response.has_sap_record,
            response.status(),
            response.sap_error.as_deref(),
        )
    }

    pub fn rows(&self) -> &[RenderedRow] {
        self.details.rows()
    }

    pub fn rows_mut(&mut self) -> Option<&mut Vec<RenderedRow>> {
        match &mut self.details {
            Details::Rows(rows) => Some(rows),
            Details::NoData => None,
        }
    }
}

/// Builds the results view. Pure; identical inputs give identical output.
pub fn render(
    record: Option<&CustomerRecord>,
    sap_code: Option<&str>,
    has_sap_record: bool,
    sap_status: SapStatus,
    sap_error: Option<&str>,
) -> ResultsView {
    let sap_code = sap_code.filter(|code| !code.is_empty());

    let (badge, generate_visible, session_warning) = if sap_status == SapStatus::SessionExpired {
        let warning = match sap_error {
            Some(detail) if !detail.trim().is_empty() => {
                format!("{} ({})", SESSION_EXPIRED_WARNING, detail.trim())
            }
            _ => SESSION_EXPIRED_WARNING.to_string(),
        };
        (
            SapBadge {
                text: BADGE_SESSION_EXPIRED.to_string(),
                level: Severity::Warning,
            },
            false,
            Some(warning),
        )
    } else if let (true, Some(code)) = (has_sap_record, sap_code) {
        (
            SapBadge {
                text: code.to_string(),
                level: Severity::Success,
            },
            false,
            None,
        )
    } else {
        (
            SapBadge {
                text: BADGE_NOT_FOUND.to_string(),
                level: Severity::Error,
            },
            true,
            None,
        )
    };

    let details = match record {
        Some(record) => Details::Rows(build_rows(record)),
        None => Details::NoData,
    };

    ResultsView {
        badge,
        generate_visible,
        session_warning,
        details,
    }
}

fn build_rows(record: &CustomerRecord) -> Vec<RenderedRow> {
    record
        .fields()
        .filter_map(|(key, value)| display_value(value).map(|text| (key, text)))
        .enumerate()
        .map(|(order, (key, value))| RenderedRow {
            key: key.to_string(),
            label: label_for(key).to_string(),
            value,
            highlighted: is_highlighted(key),
            order,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> CustomerRecord {
        CustomerRecord::normalize(&value).unwrap()
    }

    #[test]
    fn test_found_badge_hides_generate() {
        let view = render(None, Some("4000123"), true, SapStatus::Found, None);
        assert_eq!(view.badge.text, "4000123");
        assert_eq!(view.badge.level, Severity::Success);
        assert!(!view.generate_visible);
        assert!(view.session_warning.is_none());
    }

    #[test]
    fn test_missing_record_shows_generate() {
        let view = render(None, None, false, SapStatus::NotFound, None);
        assert_eq!(view.badge.text, BADGE_NOT_FOUND);
        assert_eq!(view.badge.level, Severity::Error);
        assert!(view.generate_visible);
    }

    #[test]
    fn test_has_record_without_code_is_not_found() {
        let view = render(None, Some(""), true, SapStatus::Found, None);
        assert_eq!(view.badge.text, BADGE_NOT_FOUND);
        assert!(view.generate_visible);
    }

    #[test]
    fn test_code_without_has_record_is_not_found() {
        let view = render(None, Some("4000123"), false, SapStatus::Unknown, None);
        assert_eq!(view.badge.text, BADGE_NOT_FOUND);
        assert!(view.generate_visible);
    }

    #[test]
    fn test_session_expired_takes_priority() {
        for has_record in [true, false] {
            let view = render(
                None,
                Some("4000123"),
                has_record,
                SapStatus::SessionExpired,
                Some("SAP API returned 403 Forbidden"),
            );
            assert_eq!(view.badge.text, BADGE_SESSION_EXPIRED);
            assert!(!view.generate_visible);
            let warning = view.session_warning.unwrap();
            assert!(warning.starts_with(SESSION_EXPIRED_WARNING));
            assert!(warning.contains("403 Forbidden"));
        }
    }

    #[test]
    fn test_rows_skip_empty_values_and_keep_order() {
        let rec = record(json!({
            "CustomerNumber": "C-1",
            "Title": "",
            "FirstName": "Omar",
            "Phone002": "   ",
            "Phone003": null,
            "Postcode": 11511,
            "LoyaltyTier": "Gold"
        }));
        let view = render(Some(&rec), None, false, SapStatus::NotFound, None);
        let rows = view.rows();

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["CustomerNumber", "FirstName", "Postcode", "LoyaltyTier"]);

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Customer Number", "First Name", "Postal Code", "LoyaltyTier"]
        );

        let orders: Vec<usize> = rows.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);

        assert!(rows[0].highlighted);
        assert!(!rows[1].highlighted);
        assert_eq!(rows[2].value, "11511");
    }

    #[test]
    fn test_absent_record_renders_placeholder() {
        let view = render(None, None, false, SapStatus::NotFound, None);
        assert_eq!(view.details, Details::NoData);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let rec = record(json!({"CustomerCode": "77", "FirstName": "Mona"}));
        let first = render(Some(&rec), Some("1"), true, SapStatus::Found, None);
        let second = render(Some(&rec), Some("1"), true, SapStatus::Found, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_response_uses_first_list_element() {
        let response: SearchResponse = serde_json::from_value(json!({
            "customer_data": [{"CustomerCode": "A"}, {"CustomerCode": "B"}],
            "sap_customer_code": null,
            "has_sap_record": false
        }))
        .unwrap();
        let view = ResultsView::from_response(&response);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].value, "A");
        assert!(view.generate_visible);
    }
}
