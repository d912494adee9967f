use anyhow::Result;
use mklookup_engine::render::NO_DATA;
use mklookup_engine::{Details, Severity};
use owo_colors::{OwoColorize, Style};

use crate::presentation::view_models::{GenerateViewModel, LookupViewModel};

/// Prints one-shot command results as plain text or JSON.
pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, color: bool) -> Self {
        Self { json_mode, color }
    }

    pub fn render_lookup(&self, vm: &LookupViewModel) -> Result<()> {
        print!("{}", self.format_lookup(vm)?);
        Ok(())
    }

    pub fn render_generate(&self, vm: &GenerateViewModel) -> Result<()> {
        print!("{}", self.format_generate(vm)?);
        Ok(())
    }

    pub fn format_lookup(&self, vm: &LookupViewModel) -> Result<String> {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(vm)?));
        }

        let results = &vm.results;
        let mut out = String::new();

        let badge_style = self.severity_style(results.badge.level).bold();
        out.push_str(&format!(
            "{} SAP Customer Code: {}\n",
            results.badge.level.icon(),
            self.paint(&results.badge.text, badge_style)
        ));

        if let Some(warning) = &results.session_warning {
            out.push_str(&format!(
                "{} {}\n",
                Severity::Warning.icon(),
                self.paint(warning, self.severity_style(Severity::Warning))
            ));
        }
        out.push('\n');

        match &results.details {
            Details::Rows(rows) => {
                let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
                for row in rows {
                    let marker = if row.highlighted { "*" } else { " " };
                    let label = format!("{:<width$}", row.label, width = width);
                    let label = if row.highlighted {
                        self.paint(&label, Style::new().bold())
                    } else {
                        label
                    };
                    out.push_str(&format!("{} {}  {}\n", marker, label, row.value));
                }
            }
            Details::NoData => {
                out.push_str(&format!("{}\n", self.paint(NO_DATA, Style::new().dimmed())));
            }
        }

        if results.generate_visible {
            out.push_str(&format!(
                "\n{}\n  • Create the SAP customer: {}\n",
                self.paint("💡 Tips:", Style::new().yellow().bold()),
                self.paint(
                    &format!("mklookup generate {}", vm.customer_mk),
                    Style::new().cyan()
                )
            ));
        }

        if let Some(raw) = &vm.raw {
            out.push_str(&format!(
                "\n{}\n{}\n",
                self.paint("Raw JSON:", Style::new().bold()),
                serde_json::to_string_pretty(raw)?
            ));
        }

        Ok(out)
    }

    pub fn format_generate(&self, vm: &GenerateViewModel) -> Result<String> {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(vm)?));
        }

        Ok(format!(
            "{} {}\n",
            Severity::Success.icon(),
            self.paint(&vm.message, self.severity_style(Severity::Success))
        ))
    }

    fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Success => Style::new().green(),
            Severity::Error => Style::new().red(),
            Severity::Warning => Style::new().yellow(),
            Severity::Info => Style::new().cyan(),
            Severity::Loading => Style::new().blue(),
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mklookup_engine::ResultsView;
    use mklookup_testing::fixtures;
    use mklookup_types::SearchResponse;

    fn lookup(body: serde_json::Value, raw: bool) -> LookupViewModel {
        let response: SearchResponse = serde_json::from_value(body).unwrap();
        LookupViewModel {
            customer_mk: "18643".to_string(),
            is_corporate: false,
            results: ResultsView::from_response(&response),
            raw: raw.then(|| response.customer_data.clone()),
        }
    }

    #[test]
    fn test_plain_found_output() {
        let out = ConsoleRenderer::new(false, false)
            .format_lookup(&lookup(fixtures::search_found(), false))
            .unwrap();
        insta::assert_snapshot!(out.trim_end(), @r"
        ✅ SAP Customer Code: 4000123

        * Customer Number    C-18643
        * Customer Code      18643
          Status             Active
          First Name         Omar
          Surname            Haddad
          Phone 1            0100000001
          Address Line 1     12 Nile St
          City/Region        Cairo
          Postal Code        11511
          Email              omar@example.com
          LoyaltyTier        Gold
        * SAP Customer Code  4000123
        ");
    }

    #[test]
    fn test_plain_not_found_suggests_generate() {
        let out = ConsoleRenderer::new(false, false)
            .format_lookup(&lookup(fixtures::search_not_found(), false))
            .unwrap();
        assert!(out.starts_with("❌ SAP Customer Code: Not Found\n"));
        assert!(out.contains("mklookup generate 18643"));
    }

    #[test]
    fn test_plain_session_expired_shows_warning() {
        let out = ConsoleRenderer::new(false, false)
            .format_lookup(&lookup(fixtures::search_session_expired(), false))
            .unwrap();
        assert!(out.contains("Session Expired"));
        assert!(out.contains("(SAP API returned 403 Forbidden)"));
        assert!(!out.contains("mklookup generate"));
    }

    #[test]
    fn test_plain_empty_data() {
        let out = ConsoleRenderer::new(false, false)
            .format_lookup(&lookup(fixtures::search_empty(), false))
            .unwrap();
        assert!(out.contains(NO_DATA));
    }

    #[test]
    fn test_raw_is_appended() {
        let out = ConsoleRenderer::new(false, false)
            .format_lookup(&lookup(fixtures::search_found(), true))
            .unwrap();
        let raw = out.split("Raw JSON:\n").nth(1).unwrap();
        let value: serde_json::Value = serde_json::from_str(raw.trim()).unwrap();
        assert_eq!(value[0]["CustomerNumber"], "C-18643");
    }

    #[test]
    fn test_json_output() {
        let out = ConsoleRenderer::new(true, false)
            .format_lookup(&lookup(fixtures::search_found(), false))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["customer_mk"], "18643");
        assert_eq!(value["badge"]["text"], "4000123");
        assert_eq!(value["badge"]["level"], "success");
        assert_eq!(value["generate_visible"], false);
        assert_eq!(value["details"]["kind"], "rows");
        assert_eq!(value["details"]["rows"][0]["label"], "Customer Number");
        assert!(value.get("raw").is_none());
    }
}
