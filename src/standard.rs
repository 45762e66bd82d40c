use std::{fmt::Display, io::Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standard {
    pub code: i64,
    pub name: &'static str,
}

impl Display for Standard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub static STANDARDS: &[Standard] = &[
    Standard {
        code: 199711,
        name: "Pre-C++11",
    },
    Standard {
        code: 201103,
        name: "C++11",
    },
    Standard {
        code: 201402,
        name: "C++14",
    },
    Standard {
        code: 201703,
        name: "C++17",
    },
    Standard {
        code: 202002,
        name: "C++20",
    },
    Standard {
        code: 202302,
        name: "C++23",
    },
    Standard {
        code: 202612,
        name: "C++26",
    },
];

pub const DEFAULT_CODE: i64 = 201703;

#[derive(Debug, thiserror::Error)]
pub enum StandardError {
    #[error("Invalid standard code: {0:?}")]
    InvalidCode(String),
}

pub fn resolve(code: i64) -> Option<&'static Standard> {
    resolve_in(STANDARDS, code)
}

pub fn resolve_in(table: &[Standard], code: i64) -> Option<&Standard> {
    let found = table.iter().find(|standard| standard.code == code);
    log::debug!("resolve {code} -> {:?}", found.map(|s| s.name));
    found
}

pub fn report(code: i64, writer: &mut impl Write) -> std::io::Result<()> {
    match resolve(code) {
        Some(standard) => writeln!(writer, "Using {standard}"),
        None => {
            log::warn!("Unknown standard code {code}");
            Ok(())
        }
    }
}

// Accepts the `L` suffix of the source literal, e.g. `201703L`.
pub fn parse_code(text: &str) -> Result<i64, StandardError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_suffix('L')
        .or_else(|| trimmed.strip_suffix('l'))
        .unwrap_or(trimmed);

    digits
        .parse()
        .map_err(|_| StandardError::InvalidCode(text.to_string()))
}

pub fn configured_code() -> Result<Option<i64>, StandardError> {
    option_env!("CPP_STANDARD_CODE").map(parse_code).transpose()
}
