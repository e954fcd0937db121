use std::{fmt, str::FromStr};

use crate::info_line::error::InfoLineError;

pub const HTTP_0_9: &str = "HTTP/0.9";
pub const HTTP_1_0: &str = "HTTP/1.0";
pub const HTTP_1_1: &str = "HTTP/1.1";
pub const HTTP_2: &str = "HTTP/2";
pub const HTTP_3: &str = "HTTP/3";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Version {
    H09,
    H10,
    #[default]
    H11,
    H2,
    H3,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        use Version::*;
        match self {
            H09 => HTTP_0_9,
            H10 => HTTP_1_0,
            H11 => HTTP_1_1,
            H2 => HTTP_2,
            H3 => HTTP_3,
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Version::H10 | Version::H11)
    }
}

impl FromStr for Version {
    type Err = InfoLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Version::*;
        match s {
            HTTP_0_9 => Ok(H09),
            HTTP_1_0 => Ok(H10),
            HTTP_1_1 => Ok(H11),
            HTTP_2 | "HTTP/2.0" => Ok(H2),
            HTTP_3 | "HTTP/3.0" => Ok(H3),
            _ => Err(InfoLineError::Version(s.to_string())),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
