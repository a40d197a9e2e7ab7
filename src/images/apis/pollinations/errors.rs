use std::{fmt, io};

use reqwest::StatusCode;

#[derive(Debug)]
pub enum PollinationsError {
    InvalidUrl(String),
    Transport(reqwest::Error),
    Status(StatusCode),
    Storage(io::Error),
}

impl fmt::Display for PollinationsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => write!(f, "invalid api url: {}", url),
            Self::Transport(e) => write!(f, "request failed: {}", e),
            Self::Status(status) => write!(f, "api responded with {}", status),
            Self::Storage(e) => write!(f, "failed to store image: {}", e),
        }
    }
}

impl std::error::Error for PollinationsError {}
