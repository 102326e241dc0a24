//! Text adapters: rendering and parsing delegate to the primitive.
//!
//! No formatting or grammar rules of their own: `Display` forwards the
//! formatter (flags, width, precision included) and `FromStr` accepts
//! exactly the strings the primitive accepts.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::tagged::Tagged;

impl<T: fmt::Display, M> fmt::Display for Tagged<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<T, M> FromStr for Tagged<T, M>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>()
            .map(Self::new)
            .map_err(|e| ParseError::new(core::any::type_name::<T>(), s, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Port {}
    type PortNo = Tagged<u16, Port>;

    #[test]
    fn test_display_forwards() {
        assert_eq!(PortNo::new(8080).to_string(), "8080");
        assert_eq!(Tagged::<f64>::new(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_formatter_flags_forward() {
        assert_eq!(format!("{:>6}", PortNo::new(80)), "    80");
        assert_eq!(format!("{:+}", Tagged::<i32>::new(7)), "+7");
        assert_eq!(format!("{:.3}", Tagged::<f64>::new(1.5)), "1.500");
    }

    #[test]
    fn test_parse_round_trip() {
        let parsed: PortNo = "8080".parse().unwrap();
        assert_eq!(parsed, PortNo::new(8080));
    }

    #[test]
    fn test_parse_failure_reports_input() {
        let err = "not-a-port".parse::<PortNo>().unwrap_err();
        assert_eq!(err.input(), "not-a-port");
        assert_eq!(err.primitive(), "u16");
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_parse_grammar_is_the_primitives() {
        // u16 rejects signs and out-of-range values; so does the wrapper.
        assert!("-1".parse::<PortNo>().is_err());
        assert!("70000".parse::<PortNo>().is_err());
    }
}
