use url::Url;

use super::errors::BootstrapError;

const REST_SUFFIX: &str = "/api/v2";
const WEBSOCKET_SUFFIX: &str = "/ws";

/// Data endpoints of the build master, derived from the console base url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoints {
    rest: Url,
    websocket: Url,
}

impl Endpoints {
    /// Derive REST and WebSocket endpoints from `base_url`.
    ///
    /// The WebSocket scheme is `wss` when the base is served over https and
    /// `ws` otherwise. Query and fragment of the base are dropped.
    pub(crate) fn from_base_url(
        base_url: &str,
    ) -> Result<Self, BootstrapError> {
        let base = Url::parse(base_url)?;
        let host = base.host_str().ok_or(url::ParseError::EmptyHost)?;
        let path = base.path().trim_end_matches('/');

        let mut rest = base.clone();
        rest.set_path(&format!("{path}{REST_SUFFIX}"));
        rest.set_query(None);
        rest.set_fragment(None);

        let scheme = if base.scheme() == "https" { "wss" } else { "ws" };
        let authority = match base.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        };
        let websocket = Url::parse(&format!(
            "{scheme}://{authority}{path}{WEBSOCKET_SUFFIX}"
        ))?;

        Ok(Self { rest, websocket })
    }

    pub(crate) fn rest(&self) -> &Url {
        &self.rest
    }

    pub(crate) fn websocket(&self) -> &Url {
        &self.websocket
    }
}
