/// The nine playable classes, as named in `used_by_classes`.
///
/// Parsing is case-sensitive: the catalog spells class names exactly one way
/// and callers are expected to match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TfClass {
    Scout,
    Soldier,
    Pyro,
    Demoman,
    Heavy,
    Engineer,
    Medic,
    Sniper,
    Spy,
}

const ALL_CLASSES: &[TfClass] = &[
    TfClass::Scout,
    TfClass::Soldier,
    TfClass::Pyro,
    TfClass::Demoman,
    TfClass::Heavy,
    TfClass::Engineer,
    TfClass::Medic,
    TfClass::Sniper,
    TfClass::Spy,
];

impl TfClass {
    pub fn all() -> &'static [TfClass] {
        ALL_CLASSES
    }

    /// Class name as it appears in the catalog.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scout => "Scout",
            Self::Soldier => "Soldier",
            Self::Pyro => "Pyro",
            Self::Demoman => "Demoman",
            Self::Heavy => "Heavy",
            Self::Engineer => "Engineer",
            Self::Medic => "Medic",
            Self::Sniper => "Sniper",
            Self::Spy => "Spy",
        }
    }
}

/// Error returned when a string is not one of the nine class names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "\"{0}\" is not a valid character class (expected one of Scout, Soldier, Pyro, Demoman, \
     Heavy, Engineer, Medic, Sniper, Spy)"
)]
pub struct ClassParseError(pub String);

impl std::str::FromStr for TfClass {
    type Err = ClassParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CLASSES
            .iter()
            .copied()
            .find(|class| class.name() == s)
            .ok_or_else(|| ClassParseError(s.to_string()))
    }
}

impl std::fmt::Display for TfClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "tests/class_tests.rs"]
mod tests;
