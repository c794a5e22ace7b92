//! 共享测试工具和辅助函数
//!
//! A wiremock-backed imitation of the customer panel: login handshake, dashboard and
//! a stateful TXT record form.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use strato_dns_provider::{
    ClientOptions, DnsConfig, DnsRecord, Result, StratoCredentials, StratoProvider,
};
use url::form_urlencoded;
use wiremock::matchers::{body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Match, Mock, MockServer, Request, Respond, ResponseTemplate};

pub const PANEL_PATH: &str = "/apps/CustomerService";
pub const SESSION_ID: &str = "S1";
pub const CUSTOMER_ID: &str = "42";
pub const ORDER: &str = "ORDER1";
pub const DOMAIN: &str = "example.com";
pub const IDENTIFIER: &str = "user";
pub const PASSWORD: &str = "pw";
pub const COOKIE: &str = "ksb_session=c00kie";

/// Exact query string of the records page request.
pub const READ_QUERY: &str =
    "sessionID=S1&cID=42&node=ManageDomains&action_show_txt_records&vhost=example.com";
/// Exact query string of the records form submission.
pub const WRITE_QUERY: &str = "sessionID=S1&cID=42&action_change_txt_records";

/// Matches only when the raw query string is exactly the given one, bare keys included.
pub struct QueryIs(pub &'static str);

impl Match for QueryIs {
    fn matches(&self, request: &Request) -> bool {
        request.url.query() == Some(self.0)
    }
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub fn credentials(server: &MockServer) -> StratoCredentials {
    StratoCredentials {
        endpoint: format!("{}{PANEL_PATH}", server.uri()),
        identifier: IDENTIFIER.to_string(),
        password: PASSWORD.to_string(),
        order: ORDER.to_string(),
        domain: DOMAIN.to_string(),
    }
}

pub async fn connect(server: &MockServer) -> Result<StratoProvider> {
    StratoProvider::connect(credentials(server), &ClientOptions::default()).await
}

/// Anonymous landing page that hands out the session cookie.
pub async fn mount_landing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(PANEL_PATH))
        .and(query_param_is_missing("sessionID"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", format!("{COOKIE}; Path=/").as_str())
                .set_body_string("<html><form id=\"login\"></form></html>"),
        )
        .mount(server)
        .await;
}

/// Login POST answered with `response`.
pub async fn mount_login(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(PANEL_PATH))
        .and(query_param_is_missing("sessionID"))
        .and(header("cookie", COOKIE))
        .and(body_string(format!(
            "identifier={IDENTIFIER}&passwd={PASSWORD}&action_customer_login.x=Login"
        )))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

pub fn redirect_to(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(302).insert_header("Location", location)
}

/// Dashboard listing `ORDER` (and one unrelated package) with the given link.
pub fn dashboard_page(href: &str) -> String {
    format!(
        r#"<html><body>
<div class="pkg" data-pkg-name-order="OTHER"><a href="{PANEL_PATH}?sessionID={SESSION_ID}&amp;cID=7">Other</a></div>
<div class="pkg" data-pkg-name-order="{ORDER}">
  <h3>Domain-Paket</h3>
  <a href="{href}">Verwalten</a>
</div>
</body></html>"#
    )
}

pub async fn mount_dashboard(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path(PANEL_PATH))
        .and(query_param("sessionID", SESSION_ID))
        .and(query_param("cID", "0"))
        .and(query_param("node", "kds_CustomerEntryPage"))
        .and(header("cookie", COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Full happy-path handshake: landing, login redirect and dashboard.
pub async fn mount_handshake(server: &MockServer) {
    mount_landing(server).await;
    mount_login(server, redirect_to(&format!("https://host/x?sessionID={SESSION_ID}"))).await;
    mount_dashboard(
        server,
        dashboard_page(&format!(
            "{PANEL_PATH}?sessionID={SESSION_ID}&amp;cID={CUSTOMER_ID}&amp;node=kds_PackageOverview"
        )),
    )
    .await;
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the TXT record form the way the panel does, plus one empty template row.
pub fn records_page(config: &DnsConfig) -> String {
    let radio = |name: &str, value: &str, selected: &str| {
        let checked = if value == selected { " checked" } else { "" };
        format!(r#"<input type="radio" name="{name}" value="{value}"{checked}>"#)
    };
    let rows: String = config
        .records
        .iter()
        .map(|r| {
            format!(
                r#"<div class="form-row txt-record-tmpl">
  <select name="type"><option value="TXT"{}>TXT</option><option value="TXT-SPF"{}>SPF</option></select>
  <input type="text" name="prefix" value="{}">
  <textarea name="value">{}</textarea>
</div>"#,
                if r.record_type == "TXT" { " selected" } else { "" },
                if r.record_type == "TXT-SPF" { " selected" } else { "" },
                escape_html(&r.prefix),
                escape_html(&r.value),
            )
        })
        .collect();

    format!(
        r#"<html><body>
<form id="jss_txt_record_form" method="post">
  {}{}{}
  {}{}{}
  <div id="jss_txt_container">
{rows}
    <div class="form-row txt-record-tmpl hidden"><input type="text" name="prefix" value=""></div>
  </div>
  <input type="submit" name="action_change_txt_records" value="Einstellung übernehmen">
</form>
</body></html>"#,
        radio("dmarc_type", "0", &config.dmarc_type),
        radio("dmarc_type", "1", &config.dmarc_type),
        radio("dmarc_type", "2", &config.dmarc_type),
        radio("spf_type", "0", &config.spf_type),
        radio("spf_type", "1", &config.spf_type),
        radio("spf_type", "2", &config.spf_type),
    )
}

pub fn initial_config() -> DnsConfig {
    DnsConfig {
        dmarc_type: "1".to_string(),
        spf_type: "0".to_string(),
        records: vec![DnsRecord::new("TXT", "@", "hello")],
    }
}

/// Stateful records form: GET renders the stored config, POST replaces it.
#[derive(Clone)]
pub struct PanelState {
    pub config: Arc<Mutex<DnsConfig>>,
    pub submissions: Arc<Mutex<Vec<Vec<(String, String)>>>>,
}

impl PanelState {
    pub fn new(config: DnsConfig) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn current(&self) -> DnsConfig {
        self.config.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<Vec<(String, String)>> {
        self.submissions.lock().unwrap().clone()
    }

    /// Mount the read and write endpoints for `DOMAIN` on `server`.
    pub async fn mount(&self, server: &MockServer) {
        Mock::given(method("GET"))
            .and(path(PANEL_PATH))
            .and(QueryIs(READ_QUERY))
            .and(header("cookie", COOKIE))
            .respond_with(self.clone())
            .mount(server)
            .await;

        Mock::given(method("POST"))
            .and(path(PANEL_PATH))
            .and(QueryIs(WRITE_QUERY))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(header("cookie", COOKIE))
            .respond_with(self.clone())
            .mount(server)
            .await;
    }
}

impl Respond for PanelState {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        if request.method.as_str() == "GET" {
            return ResponseTemplate::new(200).set_body_string(records_page(&self.current()));
        }

        let fields: Vec<(String, String)> = form_urlencoded::parse(&request.body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        self.submissions.lock().unwrap().push(fields.clone());

        let field = |name: &str| {
            fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };
        let repeated = |name: &str| {
            fields
                .iter()
                .filter(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
                .collect::<Vec<_>>()
        };

        let types = repeated("type");
        let prefixes = repeated("prefix");
        let values = repeated("value");
        let records = types
            .into_iter()
            .zip(prefixes)
            .zip(values)
            .map(|((t, p), v)| DnsRecord::new(t, p, v))
            .collect();

        *self.config.lock().unwrap() = DnsConfig {
            dmarc_type: field("dmarc_type"),
            spf_type: field("spf_type"),
            records,
        };

        redirect_to(&format!("{PANEL_PATH}?sessionID={SESSION_ID}&node=ManageDomains"))
    }
}
