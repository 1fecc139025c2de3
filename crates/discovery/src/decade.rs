//! Release-decade filter values.

use crate::error::DiscoveryError;
use std::fmt;
use std::str::FromStr;

/// A release-date window the players browse in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Decade {
    Twenties,
    Tens,
    Noughties,
    #[default]
    Nineties,
    Eighties,
    Seventies,
    /// No date constraint
    AllTime,
}

impl Decade {
    /// Every choice, newest first, `AllTime` last
    pub const ALL: [Decade; 7] = [
        Decade::Twenties,
        Decade::Tens,
        Decade::Noughties,
        Decade::Nineties,
        Decade::Eighties,
        Decade::Seventies,
        Decade::AllTime,
    ];

    /// First year of the decade, `None` for `AllTime`
    pub fn start_year(&self) -> Option<u16> {
        match self {
            Decade::Twenties => Some(2020),
            Decade::Tens => Some(2010),
            Decade::Noughties => Some(2000),
            Decade::Nineties => Some(1990),
            Decade::Eighties => Some(1980),
            Decade::Seventies => Some(1970),
            Decade::AllTime => None,
        }
    }

    pub fn label(&self) -> String {
        match self.start_year() {
            Some(year) => format!("{year}s"),
            None => "All Time".to_string(),
        }
    }

    /// Inclusive year bounds
    pub fn year_range(&self) -> Option<(u16, u16)> {
        self.start_year().map(|start| (start, start + 9))
    }

    /// Inclusive `YYYY-MM-DD` bounds for `primary_release_date`
    pub fn date_range(&self) -> Option<(String, String)> {
        self.year_range()
            .map(|(start, end)| (format!("{start}-01-01"), format!("{end}-12-31")))
    }

    /// `AllTime` accepts everything, including movies with no release year.
    /// A decade never accepts an unknown year.
    pub fn contains(&self, year: Option<u16>) -> bool {
        match (self.year_range(), year) {
            (None, _) => true,
            (Some((start, end)), Some(year)) => (start..=end).contains(&year),
            (Some(_), None) => false,
        }
    }

    /// Text to search for when every discover page fails: the start year,
    /// or `all` for `AllTime`
    pub fn fallback_query(&self) -> String {
        match self.start_year() {
            Some(year) => year.to_string(),
            None => "all".to_string(),
        }
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Decade {
    type Err = DiscoveryError;

    /// Accepts `1990s`, `1990`, `90s`, `all`, `all-time` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if matches!(normalized.as_str(), "all" | "all-time" | "alltime" | "all time") {
            return Ok(Decade::AllTime);
        }

        let digits = normalized.strip_suffix('s').unwrap_or(&normalized);
        let year: u16 = match digits.len() {
            2 => digits.parse::<u16>().ok().map(|yy| if yy < 30 { 2000 + yy } else { 1900 + yy }),
            4 => digits.parse().ok(),
            _ => None,
        }
        .ok_or_else(|| DiscoveryError::UnknownDecade(s.to_string()))?;

        Decade::ALL
            .into_iter()
            .find(|d| d.start_year() == Some(year))
            .ok_or_else(|| DiscoveryError::UnknownDecade(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nineties() {
        assert_eq!(Decade::default(), Decade::Nineties);
    }

    #[test]
    fn test_date_range() {
        assert_eq!(
            Decade::Eighties.date_range(),
            Some(("1980-01-01".to_string(), "1989-12-31".to_string()))
        );
        assert_eq!(Decade::AllTime.date_range(), None);
    }

    #[test]
    fn test_contains() {
        assert!(Decade::Nineties.contains(Some(1990)));
        assert!(Decade::Nineties.contains(Some(1999)));
        assert!(!Decade::Nineties.contains(Some(2000)));
        assert!(!Decade::Nineties.contains(None));
        assert!(Decade::AllTime.contains(None));
    }

    #[test]
    fn test_labels_and_fallback_query() {
        assert_eq!(Decade::Tens.label(), "2010s");
        assert_eq!(Decade::AllTime.to_string(), "All Time");
        assert_eq!(Decade::Nineties.fallback_query(), "1990");
        assert_eq!(Decade::AllTime.fallback_query(), "all");
    }

    #[test]
    fn test_parse() {
        assert_eq!("1990s".parse::<Decade>().unwrap(), Decade::Nineties);
        assert_eq!("90s".parse::<Decade>().unwrap(), Decade::Nineties);
        assert_eq!("20s".parse::<Decade>().unwrap(), Decade::Twenties);
        assert_eq!("2010".parse::<Decade>().unwrap(), Decade::Tens);
        assert_eq!("ALL".parse::<Decade>().unwrap(), Decade::AllTime);
        assert!("1960s".parse::<Decade>().is_err());
        assert!("soon".parse::<Decade>().is_err());
    }
}
