use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Target dimensions written as `<width>x<height>` in the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
}

impl SizeSpec {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero; such a size cannot be rendered
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl FromStr for SizeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("size '{}' is not of the form <width>x<height>", s))?;

        let parse = |token: &str, what: &str| -> Result<u32, String> {
            match token.trim().parse::<u32>() {
                Ok(0) | Err(_) => Err(format!("size '{}' has an invalid {}", s, what)),
                Ok(v) => Ok(v),
            }
        };

        Ok(Self {
            width: parse(w, "width")?,
            height: parse(h, "height")?,
        })
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl<'de> Deserialize<'de> for SizeSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl Serialize for SizeSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!("100x50".parse::<SizeSpec>().unwrap(), SizeSpec::new(100, 50));
        assert_eq!(" 8X6 ".parse::<SizeSpec>().unwrap(), SizeSpec::new(8, 6));
        assert_eq!(SizeSpec::new(640, 480).to_string(), "640x480");
    }

    #[test]
    fn test_reject_malformed_size() {
        assert!("100".parse::<SizeSpec>().is_err());
        assert!("x100".parse::<SizeSpec>().is_err());
        assert!("100x".parse::<SizeSpec>().is_err());
        assert!("0x10".parse::<SizeSpec>().is_err());
        assert!("ax10".parse::<SizeSpec>().is_err());
        assert!("10x10x10".parse::<SizeSpec>().is_err());
    }

    #[test]
    fn test_empty_size() {
        assert!(SizeSpec::new(0, 10).is_empty());
        assert!(SizeSpec::new(10, 0).is_empty());
        assert!(!SizeSpec::new(1, 1).is_empty());
    }
}
