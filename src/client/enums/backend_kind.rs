use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum BackendKind {
    redis,
    memcache,
    memory,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::redis => write!(f, "redis"),
            BackendKind::memcache => write!(f, "memcache"),
            BackendKind::memory => write!(f, "memory"),
        }
    }
}

impl BackendKind {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            BackendKind::redis => "redis://",
            BackendKind::memcache => "memcache://",
            BackendKind::memory => "memory://",
        }
    }
}
