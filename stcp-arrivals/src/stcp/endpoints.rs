//! URL construction for the STCP endpoints.

use reqwest::Url;

use crate::config::{ClientConfig, ConfigError};

/// Validated endpoint URLs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    lines: Url,
    widget: Url,
    widget_uid: String,
}

impl Endpoints {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            lines: parse(&config.lines_url)?,
            widget: parse(&config.widget_url)?,
            widget_uid: config.widget_uid.clone(),
        })
    }

    /// `?action=lineslist`
    pub fn lines(&self) -> Url {
        self.metadata(&[("action", "lineslist")])
    }

    /// `?action=linedirslist&lcode=<line>`
    pub fn directions(&self, line: &str) -> Url {
        self.metadata(&[("action", "linedirslist"), ("lcode", line)])
    }

    /// `?action=linestops&lcode=<line>&ldir=<direction>`
    pub fn stops(&self, line: &str, direction: &str) -> Url {
        self.metadata(&[("action", "linestops"), ("lcode", line), ("ldir", direction)])
    }

    /// `?uid=<uid>&np=&paragem=<stop>&submete=Mostrar`
    pub fn arrivals(&self, stop: &str) -> Url {
        with_query(
            &self.widget,
            &[
                ("uid", self.widget_uid.as_str()),
                ("np", ""),
                ("paragem", stop),
                ("submete", "Mostrar"),
            ],
        )
    }

    fn metadata(&self, params: &[(&str, &str)]) -> Url {
        with_query(&self.lines, params)
    }
}

fn parse(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn with_query(base: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().clear().extend_pairs(params);
    url
}
