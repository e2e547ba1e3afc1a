//! Local stand-in for the STCP endpoints, used by async tests.
//!
//! Metadata (`/callservice.php`):
//! - `lineslist`: lines 200, 205 and ZM
//! - `linedirslist&lcode=200`: two directions (dir 0 and 1)
//! - `linestops&lcode=200&ldir=0`: stops BLM1 and EMPTY
//! - anything else: a JSON object without `records`
//!
//! Arrivals (`/post.php?paragem=...`):
//! - `BLM1`: two rows
//! - `EMPTY`: no rows
//! - `BAD`: one row without a status cell
//! - `SLOW`: same as `BLM1`, after two seconds
//! - `LATIN1`: one row, windows-1252 bytes, charset only in `<meta>`
//! - `FAIL`: HTTP 500

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use serde_json::json;

use crate::config::ClientConfig;

pub(crate) struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    pub(crate) async fn start() -> Self {
        let app = Router::new()
            .route("/callservice.php", get(callservice))
            .route("/post.php", get(widget));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr }
    }

    pub(crate) fn lines_url(&self) -> String {
        format!("http://{}/callservice.php", self.addr)
    }

    pub(crate) fn widget_url(&self) -> String {
        format!("http://{}/post.php", self.addr)
    }

    pub(crate) fn config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_lines_url(self.lines_url())
            .with_widget_url(self.widget_url())
    }
}

pub(crate) fn url(base: &str, params: &[(&str, &str)]) -> Url {
    Url::parse_with_params(base, params).unwrap()
}

pub(crate) const TWO_ROWS: &str = r##"<html><body>
<div class="overview">
  <table>
    <tr><th>Linha</th><th>Destino</th><th>Hora</th><th>Espera</th></tr>
    <tr class="separa">
      <td class="Linha1"><ul><li><a href="#">200</a></li></ul></td>
      <td class="Linha2">CAMPANHÃ - ESTAÇÃO   </td>
      <td class="Linha3">14:02</td>
      <td class="Linha4"> a chegar </td>
    </tr>
    <tr class="separa">
      <td class="Linha1"> 205 </td>
      <td class="Linha2">CAST. QUEIJO -</td>
      <td class="Linha3">14:05</td>
      <td class="Linha4">passou há 3 min</td>
    </tr>
  </table>
</div>
</body></html>"##;

/// Declares its encoding only in a `<meta>` tag; served as windows-1252.
pub(crate) const LATIN1_ROW: &str = r#"<html><head>
<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">
</head><body>
<div class="overview">
  <table>
    <tr class="separa">
      <td class="Linha1">200</td>
      <td class="Linha2">CAMPANHÃ - ESTAÇÃO</td>
      <td class="Linha4">a chegar</td>
    </tr>
  </table>
</div>
</body></html>"#;

pub(crate) const NO_ROWS: &str = r#"<html><body>
<div class="overview"><table><tr><th>Linha</th></tr></table></div>
<div class="msgBox">Sem autocarros previstos</div>
</body></html>"#;

pub(crate) const MISSING_STATUS: &str = r#"<html><body>
<div class="overview">
  <table>
    <tr class="separa">
      <td class="Linha1">200</td>
      <td class="Linha2">BOLHÃO</td>
    </tr>
  </table>
</div>
</body></html>"#;

async fn callservice(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    let action = params.get("action").map(String::as_str);
    let lcode = params.get("lcode").map(String::as_str);
    let ldir = params.get("ldir").map(String::as_str);

    let body = match (action, lcode, ldir) {
        (Some("lineslist"), _, _) => json!({
            "records": [
                { "code": "200", "pubcode": "200", "description": "Linha 200" },
                { "code": 205, "pubcode": "205", "description": "Linha 205" },
                { "code": "ZM", "pubcode": "ZM", "description": "Linha ZM" },
            ]
        }),
        (Some("linedirslist"), Some("200"), _) => json!({
            "records": [
                { "dir": 0, "descr_dir": "Bolhão - Castelo do Queijo" },
                { "dir": "1", "descr_dir": "Castelo do Queijo - Bolhão" },
            ]
        }),
        (Some("linestops"), Some("200"), Some("0")) => json!({
            "records": [
                { "code": "BLM1", "name": "Bolhão", "zone": "PRT1" },
                { "code": "EMPTY", "name": "Sem Serviço" },
            ]
        }),
        (Some("linedirslist"), _, _) | (Some("linestops"), _, _) => json!({ "records": [] }),
        _ => json!({ "error": "unknown action" }),
    };

    Json(body)
}

async fn widget(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("paragem").map(String::as_str) {
        Some("BLM1") => Html(TWO_ROWS).into_response(),
        Some("EMPTY") => Html(NO_ROWS).into_response(),
        Some("BAD") => Html(MISSING_STATUS).into_response(),
        Some("SLOW") => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Html(TWO_ROWS).into_response()
        }
        Some("LATIN1") => {
            let (body, _, _) = encoding_rs::WINDOWS_1252.encode(LATIN1_ROW);
            ([(header::CONTENT_TYPE, "text/html")], body.into_owned()).into_response()
        }
        Some("FAIL") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Html(NO_ROWS).into_response(),
    }
}
