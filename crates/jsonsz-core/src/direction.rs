//! Direction of travel for one mapping pass.

/// Which way values move between a mappable object and its JSON map.
///
/// A cursor's direction is fixed when it is created. The same
/// `describe_mapping` declaration runs under both directions; only the
/// field binding branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// JSON → object. Field values are read from the cursor's map.
    Decoding,

    /// Object → JSON. Field values are written into the cursor's map.
    Encoding,
}

impl Direction {
    /// Get the string representation of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Decoding => "decoding",
            Direction::Encoding => "encoding",
        }
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, Direction::Decoding)
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, Direction::Encoding)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
