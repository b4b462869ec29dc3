use serde::{Deserialize, Serialize};

/// One of the two fixed choices on the ballot.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Candidate {
    Barbie,
    Oppenheimer,
}

impl Candidate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Candidate::Barbie => "barbie",
            Candidate::Oppenheimer => "oppenheimer",
        }
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Candidate {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "barbie" => Ok(Candidate::Barbie),
            "oppenheimer" => Ok(Candidate::Oppenheimer),
            other => Err(super::Error::InvalidRequest(format!(
                "unknown candidate: {}",
                other
            ))),
        }
    }
}
