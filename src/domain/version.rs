use std::fmt;

/// Whether a release tag carried the `-final` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    /// `release-X.Y.Z-final`: a closed release
    Final,
    /// `release-X.Y.Z`: a release still being worked towards
    Candidate,
}

/// Structured form of a release tag descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub bugfix: u32,
    pub kind: ReleaseKind,
    /// Commits since the tag, 0 when HEAD is the tagged commit
    pub deviation: u32,
    /// Abbreviated commit id without the leading `g`, possibly empty
    pub hash: String,
}

impl Version {
    /// Create a version sitting exactly on its tag
    pub fn new(major: u32, minor: u32, bugfix: u32, kind: ReleaseKind) -> Self {
        Version {
            major,
            minor,
            bugfix,
            kind,
            deviation: 0,
            hash: String::new(),
        }
    }

    /// Set the commit distance and hash
    pub fn with_deviation(mut self, deviation: u32, hash: impl Into<String>) -> Self {
        self.deviation = deviation;
        self.hash = hash.into();
        self
    }

    pub fn is_final(&self) -> bool {
        self.kind == ReleaseKind::Final
    }

    /// The numeric core as a tuple
    pub fn triple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.bugfix)
    }

    /// Counter used for pre-release suffixes, never below 1
    pub fn suffix_counter(&self) -> u32 {
        self.deviation.max(1)
    }

    /// Advance one component, resetting the lower ones
    ///
    /// Parsed versions keep every component below `u32::MAX`, so the
    /// saturation only applies to hand-built values.
    pub fn bump(&self, increment: Increment) -> Self {
        let (major, minor, bugfix) = match increment {
            Increment::Major => (self.major.saturating_add(1), 0, 0),
            Increment::Minor => (self.major, self.minor.saturating_add(1), 0),
            Increment::Bugfix => (self.major, self.minor, self.bugfix.saturating_add(1)),
        };

        Version {
            major,
            minor,
            bugfix,
            kind: self.kind,
            deviation: self.deviation,
            hash: self.hash.clone(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

/// Which version component an increment advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    Major,
    Minor,
    Bugfix,
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Increment::Major => write!(f, "major"),
            Increment::Minor => write!(f, "minor"),
            Increment::Bugfix => write!(f, "bugfix"),
        }
    }
}
