//! Server version and the capability predicates derived from it.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{ClientError, Result};

/// A server release, e.g. `0.90.13`, `1.0.0.Beta2` or `7.10.2-SNAPSHOT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release or build qualifier (`Beta2`, `SNAPSHOT`).
    pub qualifier: Option<String>,
}

impl ServerVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    /// Read `version.number` from the root endpoint (`GET /`).
    pub fn from_root_response(body: &Value) -> Result<Self> {
        let number = body
            .pointer("/version/number")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ClientError::MalformedResponse("root response has no 'version.number'".to_string())
            })?;
        number
            .parse()
            .map_err(|e: ClientError| ClientError::MalformedResponse(e.to_string()))
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl FromStr for ServerVersion {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ClientError::InvalidArgument(format!("invalid server version '{}'", s));

        let (numbers, dash_qualifier) = match s.trim().split_once('-') {
            Some((numbers, qualifier)) => (numbers, Some(qualifier)),
            None => (s.trim(), None),
        };

        let mut parts = numbers.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;

        let mut rest = [0u64; 2];
        let mut dot_qualifier = None;
        for slot in rest.iter_mut() {
            match parts.next() {
                Some(p) => match p.parse() {
                    Ok(n) => *slot = n,
                    Err(_) => {
                        dot_qualifier = Some(p);
                        break;
                    }
                },
                None => break,
            }
        }
        if dot_qualifier.is_none() {
            dot_qualifier = parts.next();
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        let qualifier = dash_qualifier
            .or(dot_qualifier)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        Ok(Self {
            major,
            minor: rest[0],
            patch: rest[1],
            qualifier,
        })
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(q) = &self.qualifier {
            write!(f, "-{}", q)?;
        }
        Ok(())
    }
}

/// Whether the server still has the per-index gateway snapshot endpoint.
/// It was removed in 1.2.0.
pub fn supports_gateway_snapshots(version: &ServerVersion) -> bool {
    version.triple() < (1, 2, 0)
}

pub fn is_major_version(version: &ServerVersion, major: u64) -> bool {
    version.major == major
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(s: &str) -> ServerVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(v("0.90.13"), ServerVersion::new(0, 90, 13));
        assert_eq!(v("1.2"), ServerVersion::new(1, 2, 0));
        assert_eq!(v("7"), ServerVersion::new(7, 0, 0));
    }

    #[test]
    fn test_parse_qualifiers() {
        let snapshot = v("7.10.2-SNAPSHOT");
        assert_eq!(snapshot.triple(), (7, 10, 2));
        assert_eq!(snapshot.qualifier.as_deref(), Some("SNAPSHOT"));

        let beta = v("1.0.0.Beta2");
        assert_eq!(beta.triple(), (1, 0, 0));
        assert_eq!(beta.qualifier.as_deref(), Some("Beta2"));

        let rc = v("1.0.RC1");
        assert_eq!(rc.triple(), (1, 0, 0));
        assert_eq!(rc.qualifier.as_deref(), Some("RC1"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ServerVersion>().is_err());
        assert!("abc".parse::<ServerVersion>().is_err());
        assert!("1.2.3.4.5".parse::<ServerVersion>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(v("0.90.13").to_string(), "0.90.13");
        assert_eq!(v("8.0.0-rc1").to_string(), "8.0.0-rc1");
    }

    #[test]
    fn test_gateway_snapshot_support() {
        assert!(supports_gateway_snapshots(&v("0.90.13")));
        assert!(supports_gateway_snapshots(&v("1.1.2")));
        assert!(!supports_gateway_snapshots(&v("1.2.0")));
        assert!(!supports_gateway_snapshots(&v("7.10.2")));
    }

    #[test]
    fn test_is_major_version() {
        assert!(is_major_version(&v("1.7.5"), 1));
        assert!(!is_major_version(&v("0.90.13"), 1));
    }

    #[test]
    fn test_from_root_response() {
        let body = json!({"name": "node-1", "version": {"number": "1.1.2", "lucene_version": "4.7"}});
        assert_eq!(
            ServerVersion::from_root_response(&body).unwrap(),
            ServerVersion::new(1, 1, 2)
        );
        assert!(matches!(
            ServerVersion::from_root_response(&json!({"tagline": "You Know, for Search"})),
            Err(ClientError::MalformedResponse(_))
        ));
    }
}
