//! TXT record form serialization

use url::form_urlencoded;

use crate::types::DnsConfig;

use super::{
    ACTION_CHANGE_TXT_RECORDS, NODE_MANAGE_DOMAINS, PARAM_CUSTOMER_ID, PARAM_NODE,
    PARAM_SESSION_ID, PARAM_VHOST,
};

/// `cID` value the panel's own form submits; not the resolved customer id.
pub(crate) const SUBMIT_CUSTOMER_ID: &str = "1";

/// Caption of the panel's submit button ("apply settings").
pub(crate) const SUBMIT_CAPTION: &str = "Einstellung übernehmen";

const FIELD_DMARC_TYPE: &str = "dmarc_type";
const FIELD_SPF_TYPE: &str = "spf_type";
const FIELD_RECORD_TYPE: &str = "type";
const FIELD_RECORD_PREFIX: &str = "prefix";
const FIELD_RECORD_VALUE: &str = "value";

/// Encode `config` as the body of a records form submission.
///
/// Records are emitted as repeated `type`/`prefix`/`value` triples in list order; the
/// panel pairs them up by position. No field is validated.
pub(crate) fn encode_config_form(session_id: &str, domain: &str, config: &DnsConfig) -> String {
    let mut form = form_urlencoded::Serializer::new(String::new());
    form.append_pair(PARAM_SESSION_ID, session_id)
        .append_pair(PARAM_CUSTOMER_ID, SUBMIT_CUSTOMER_ID)
        .append_pair(PARAM_NODE, NODE_MANAGE_DOMAINS)
        .append_pair(PARAM_VHOST, domain)
        .append_pair(FIELD_DMARC_TYPE, &config.dmarc_type)
        .append_pair(FIELD_SPF_TYPE, &config.spf_type);

    for record in &config.records {
        form.append_pair(FIELD_RECORD_TYPE, &record.record_type)
            .append_pair(FIELD_RECORD_PREFIX, &record.prefix)
            .append_pair(FIELD_RECORD_VALUE, &record.value);
    }

    form.append_pair(ACTION_CHANGE_TXT_RECORDS, SUBMIT_CAPTION)
        .finish()
}
