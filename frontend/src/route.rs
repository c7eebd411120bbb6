//! URL hash protocol shared by the router and the page markup.
//!
//! Three forms are understood: `#home`, `#servico-<id>` and `#<section-id>`.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use thiserror::Error;

pub const HOME_FRAGMENT: &str = "home";
pub const SERVICE_PREFIX: &str = "servico-";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("hash is empty")]
    Empty,
    #[error("invalid service id {0:?}")]
    InvalidServiceId(String),
    #[error("hash is not valid percent-encoded UTF-8: {0}")]
    Encoding(String),
}

/// 1-based identifier of a service detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceId(NonZeroU32);

impl ServiceId {
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Element id of the detail container in the page markup.
    pub fn container_id(self) -> String {
        format!("service-{}", self.0)
    }

    /// Inverse of [`ServiceId::container_id`].
    pub fn from_container_id(element_id: &str) -> Option<Self> {
        element_id
            .strip_prefix("service-")
            .and_then(|rest| rest.parse().ok())
    }
}

impl FromStr for ServiceId {
    type Err = HashError;

    // Digits only: "3abc", "+3" and "0" are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HashError::InvalidServiceId(s.to_string()));
        }
        s.parse::<u32>()
            .ok()
            .and_then(ServiceId::new)
            .ok_or_else(|| HashError::InvalidServiceId(s.to_string()))
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The top-level page currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    ServiceDetail(ServiceId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashRoute {
    Home,
    Service(ServiceId),
    Section(String),
}

impl HashRoute {
    /// Parses `location.hash`. The leading `#` is optional.
    pub fn parse(hash: &str) -> Result<Self, HashError> {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        if fragment.is_empty() {
            return Err(HashError::Empty);
        }
        if fragment == HOME_FRAGMENT {
            return Ok(HashRoute::Home);
        }
        if let Some(id) = fragment.strip_prefix(SERVICE_PREFIX) {
            return id.parse().map(HashRoute::Service);
        }
        let section = urlencoding::decode(fragment)
            .map_err(|e| HashError::Encoding(e.to_string()))?;
        Ok(HashRoute::Section(section.into_owned()))
    }
}

impl From<View> for HashRoute {
    fn from(view: View) -> Self {
        match view {
            View::Home => HashRoute::Home,
            View::ServiceDetail(id) => HashRoute::Service(id),
        }
    }
}

impl fmt::Display for HashRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashRoute::Home => write!(f, "#{}", HOME_FRAGMENT),
            HashRoute::Service(id) => write!(f, "#{}{}", SERVICE_PREFIX, id),
            HashRoute::Section(id) => write!(f, "#{}", urlencoding::encode(id)),
        }
    }
}
