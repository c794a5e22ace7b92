//! TXT record form parsing
//!
//! All knowledge of the records page markup lives here. Every structural mismatch maps
//! to a distinct [`ReadFailure`]; only incomplete record rows are tolerated.

use scraper::{ElementRef, Html};

use crate::error::{ReadFailure, Result};
use crate::providers::common::compile_selector;
use crate::types::{DnsConfig, DnsRecord};

use super::error::{PROVIDER_NAME, read_failed};

const FORM_SELECTOR: &str = "form#jss_txt_record_form";
const DMARC_SELECTOR: &str = r#"input[name="dmarc_type"][checked]"#;
const SPF_SELECTOR: &str = r#"input[name="spf_type"][checked]"#;
const ROW_SELECTOR: &str = r#"div#jss_txt_container > div[class*="txt-record-tmpl"]"#;
const ROW_TYPE_SELECTOR: &str = r#"select[name="type"] option[selected]"#;
const ROW_PREFIX_SELECTOR: &str = r#"input[name="prefix"]"#;
const ROW_VALUE_SELECTOR: &str = r#"textarea[name="value"]"#;

/// Parse the records page of `domain` into a [`DnsConfig`].
pub(crate) fn parse_dns_config(html: &str, domain: &str) -> Result<DnsConfig> {
    let document = Html::parse_document(html);

    let form_selector = compile_selector(FORM_SELECTOR, PROVIDER_NAME)?;
    let form = document
        .select(&form_selector)
        .next()
        .ok_or_else(|| read_failed(domain, ReadFailure::FormNotFound))?;

    let dmarc_type = checked_value(form, DMARC_SELECTOR)?
        .ok_or_else(|| read_failed(domain, ReadFailure::DmarcTypeMissing))?;
    let spf_type = checked_value(form, SPF_SELECTOR)?
        .ok_or_else(|| read_failed(domain, ReadFailure::SpfTypeMissing))?;

    let row_selector = compile_selector(ROW_SELECTOR, PROVIDER_NAME)?;
    let row_parser = RowParser::new()?;
    let mut records = Vec::new();
    for (index, row) in form.select(&row_selector).enumerate() {
        match row_parser.parse(row) {
            Some(record) => records.push(record),
            None => log::debug!("[{PROVIDER_NAME}] Skipping incomplete record row #{index}"),
        }
    }

    Ok(DnsConfig {
        dmarc_type,
        spf_type,
        records,
    })
}

/// `value` of the first element matching `css`, if present and non-empty.
fn checked_value(scope: ElementRef<'_>, css: &str) -> Result<Option<String>> {
    let selector = compile_selector(css, PROVIDER_NAME)?;
    Ok(scope
        .select(&selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .filter(|value| !value.is_empty())
        .map(ToString::to_string))
}

struct RowParser {
    record_type: scraper::Selector,
    prefix: scraper::Selector,
    value: scraper::Selector,
}

impl RowParser {
    fn new() -> Result<Self> {
        Ok(Self {
            record_type: compile_selector(ROW_TYPE_SELECTOR, PROVIDER_NAME)?,
            prefix: compile_selector(ROW_PREFIX_SELECTOR, PROVIDER_NAME)?,
            value: compile_selector(ROW_VALUE_SELECTOR, PROVIDER_NAME)?,
        })
    }

    /// A row needs a selected type and a value textarea; the prefix may be missing.
    fn parse(&self, row: ElementRef<'_>) -> Option<DnsRecord> {
        let option = row.select(&self.record_type).next()?;
        let textarea = row.select(&self.value).next()?;

        // An <option> without a value attribute submits its text
        let record_type = option.value().attr("value").map_or_else(
            || option.text().collect::<String>().trim().to_string(),
            ToString::to_string,
        );
        let prefix = row
            .select(&self.prefix)
            .next()
            .and_then(|input| input.value().attr("value"))
            .unwrap_or_default()
            .to_string();
        let value = textarea.text().collect::<String>();

        Some(DnsRecord {
            record_type,
            prefix,
            value,
        })
    }
}
