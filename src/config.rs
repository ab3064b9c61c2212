use std::env;

use url::Url;

use crate::error::{Error, Result};

const KARBY_URL: &str = "https://mpi.mashie.com/public/app/Vallentuna%20kommun/0957e55a";
const OLYMPIA_URL: &str = "https://mpi.mashie.com/public/app/Vallentuna%20kommun/b22e74ea";

/// The two institutions this tool serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum School {
    Karby,
    Olympia,
}

impl School {
    pub const ALL: [Self; 2] = [Self::Karby, Self::Olympia];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Karby => "karby",
            Self::Olympia => "olympia",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Karby => "Karby skola",
            Self::Olympia => "Olympiaskolan",
        }
    }

    const fn default_url(self) -> &'static str {
        match self {
            Self::Karby => KARBY_URL,
            Self::Olympia => OLYMPIA_URL,
        }
    }

    const fn env_var(self) -> &'static str {
        match self {
            Self::Karby => "KARBY_URL",
            Self::Olympia => "OLYMPIA_URL",
        }
    }
}

/// Where each school's menu page lives, plus an optional CORS relay to route
/// requests through. The relay is off by default; a native client can talk to
/// the menu provider directly.
#[derive(Debug, Clone)]
pub struct Config {
    karby: Url,
    olympia: Url,
    relay: Option<Url>,
}

impl Config {
    #[must_use]
    pub const fn new(karby: Url, olympia: Url, relay: Option<Url>) -> Self {
        Self {
            karby,
            olympia,
            relay,
        }
    }

    /// Built-in URLs, overridable per school via `KARBY_URL` / `OLYMPIA_URL`,
    /// with `MENU_RELAY` selecting a relay prefix.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            school_url(School::Karby)?,
            school_url(School::Olympia)?,
            match env::var("MENU_RELAY") {
                Ok(raw) => Some(parse_url("MENU_RELAY", &raw)?),
                Err(_) => None,
            },
        ))
    }

    #[must_use]
    pub const fn url(&self, school: School) -> &Url {
        match school {
            School::Karby => &self.karby,
            School::Olympia => &self.olympia,
        }
    }

    #[must_use]
    pub const fn relay(&self) -> Option<&Url> {
        self.relay.as_ref()
    }
}

fn school_url(school: School) -> Result<Url> {
    match env::var(school.env_var()) {
        Ok(raw) => parse_url(school.env_var(), &raw),
        Err(_) => parse_url("default", school.default_url()),
    }
}

fn parse_url(source: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| Error::config_error(format!("invalid url in {source}: {e}")))
}
