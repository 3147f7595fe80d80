use std::str::FromStr;

#[derive(Debug, PartialEq, Eq)]
pub struct ParseSeedError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed(pub u64);

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Numeric text is taken as a signed 64-bit seed, anything else is hashed like
/// `java.lang.String::hashCode`. Blank text has no seed.
impl FromStr for Seed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseSeedError);
        }

        if let Ok(value) = s.parse::<i64>() {
            return Ok(Self(value as u64));
        }

        let hash = s
            .encode_utf16()
            .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
        Ok(Self(hash as i64 as u64))
    }
}
