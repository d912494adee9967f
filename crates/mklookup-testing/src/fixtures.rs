//! Response bodies shaped like the lookup backend's.

use serde_json::{Value, json};

/// Individual customer as returned by the source system, including the
/// empty and whitespace-only fields it typically carries.
pub fn individual_customer() -> Value {
    json!({
        "CustomerNumber": "C-18643",
        "CustomerCode": "18643",
        "Status": "Active",
        "Title": "",
        "FirstName": "Omar",
        "SurName": "Haddad",
        "Phone001": "0100000001",
        "Phone002": "   ",
        "Phone003": null,
        "Address001": "12 Nile St",
        "Address004": "Cairo",
        "Postcode": 11511,
        "email": "omar@example.com",
        "LoyaltyTier": "Gold",
        "SAP_customer": "4000123"
    })
}

/// Corporate account from the sales ledger.
pub fn corporate_customer() -> Value {
    json!({
        "AccountCode": "SL-220",
        "CustomerName": "Delta Logistics",
        "RegestreationNumber": "REG-9981",
        "District": "Maadi",
        "Region": "Cairo",
        "BuildingNumber": "7",
        "SAP_customer": null
    })
}

/// Search body for a customer that already exists in SAP.
pub fn search_found() -> Value {
    json!({
        "success": true,
        "customer_data": [individual_customer()],
        "sap_customer_code": "4000123",
        "has_sap_record": true,
        "sap_status": "found",
        "sap_error": null
    })
}

/// Search body for a customer with no SAP record (list form of `customer_data`).
pub fn search_not_found() -> Value {
    json!({
        "success": true,
        "customer_data": [corporate_customer()],
        "sap_customer_code": null,
        "has_sap_record": false,
        "sap_status": "not_found",
        "sap_error": null
    })
}

/// Search body from an older backend that does not send `sap_status`.
pub fn search_legacy_shape() -> Value {
    json!({
        "success": true,
        "customer_data": individual_customer(),
        "sap_customer_code": "4000123",
        "has_sap_record": true
    })
}

/// Search body when the SAP session cookie on the server has expired.
pub fn search_session_expired() -> Value {
    json!({
        "success": true,
        "customer_data": [individual_customer()],
        "sap_customer_code": null,
        "has_sap_record": true,
        "sap_status": "session_expired",
        "sap_error": "SAP API returned 403 Forbidden"
    })
}

/// Search body with no customer data at all.
pub fn search_empty() -> Value {
    json!({
        "success": true,
        "customer_data": [],
        "sap_customer_code": null,
        "has_sap_record": false
    })
}

pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

pub fn generate_ok() -> Value {
    json!({
        "success": true,
        "message": "SAP code generation will be implemented here. This will create the customer in SAP under the Mercedes-Benz schema for both Sales and After-Sales."
    })
}
