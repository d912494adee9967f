/// Display labels for the source system's field names.
///
/// Keys not listed here are shown as-is. The misspellings
/// (`RegestreationNumber`, `EnglishFirstNmae`) are the real field names.
const FIELD_LABELS: &[(&str, &str)] = &[
    ("CustomerNumber", "Customer Number"),
    ("CustomerCode", "Customer Code"),
    ("Status", "Status"),
    ("Title", "Title"),
    ("FirstName", "First Name"),
    ("SurName", "Surname"),
    ("Salute", "Salutation"),
    ("Phone001", "Phone 1"),
    ("Phone002", "Phone 2"),
    ("Phone003", "Phone 3"),
    ("Phone004", "Phone 4"),
    ("Address001", "Address Line 1"),
    ("Address002", "Address Line 2"),
    ("Address003", "Address Line 3"),
    ("Address004", "City/Region"),
    ("Address005", "Country"),
    ("Postcode", "Postal Code"),
    ("email", "Email"),
    ("CountryC", "Country Code"),
    ("Sex", "Gender"),
    ("SocialId", "Social ID"),
    ("AccountCode", "Account Code"),
    ("RegestreationNumber", "Registration Number"),
    ("Address", "Address"),
    ("District", "District"),
    ("Region", "Region"),
    ("BuildingNumber", "Building Number"),
    ("CustomerName", "Customer Name"),
    ("Email", "Email"),
    ("EnglishFirstNmae", "English First Name"),
    ("EnglishLastName", "English Last Name"),
    ("MobileNumber", "Mobile Number"),
    ("SAP_customer", "SAP Customer Code"),
];

/// Fields rendered with emphasis.
const HIGHLIGHTED_FIELDS: &[&str] = &["SAP_customer", "CustomerNumber", "CustomerCode"];

pub fn label_for(key: &str) -> &str {
    FIELD_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

pub fn is_highlighted(key: &str) -> bool {
    HIGHLIGHTED_FIELDS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(label_for("Address004"), "City/Region");
        assert_eq!(label_for("RegestreationNumber"), "Registration Number");
        assert_eq!(label_for("SAP_customer"), "SAP Customer Code");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(label_for("LoyaltyTier"), "LoyaltyTier");
    }

    #[test]
    fn test_label_lookup_is_case_sensitive() {
        assert_eq!(label_for("email"), "Email");
        assert_eq!(label_for("EMAIL"), "EMAIL");
    }

    #[test]
    fn test_highlighted_fields() {
        assert!(is_highlighted("CustomerCode"));
        assert!(is_highlighted("SAP_customer"));
        assert!(!is_highlighted("FirstName"));
    }
}
