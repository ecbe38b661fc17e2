//! Voter persona entities

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Man, Gender::Woman];

    pub fn noun(&self) -> &'static str {
        match self {
            Gender::Man => "man",
            Gender::Woman => "woman",
        }
    }

    pub fn subject_pronoun(&self) -> &'static str {
        match self {
            Gender::Man => "he",
            Gender::Woman => "she",
        }
    }

    pub fn object_pronoun(&self) -> &'static str {
        match self {
            Gender::Man => "him",
            Gender::Woman => "her",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    NoHighSchool,
    HighSchool,
    SomeCollege,
    Bachelors,
    Graduate,
}

impl Education {
    pub const ALL: [Education; 5] = [
        Education::NoHighSchool,
        Education::HighSchool,
        Education::SomeCollege,
        Education::Bachelors,
        Education::Graduate,
    ];

    /// Phrase completing "have ..." in the voter persona
    pub fn description(&self) -> &'static str {
        match self {
            Education::NoHighSchool => "did not finish high school",
            Education::HighSchool => "a high school education",
            Education::SomeCollege => "some college education",
            Education::Bachelors => "a bachelor's degree",
            Education::Graduate => "a graduate degree",
        }
    }

    /// Compound adjective used in the canvasser's briefing
    pub fn adjective(&self) -> &'static str {
        match self {
            Education::NoHighSchool => "non-high-school",
            Education::HighSchool => "high-school",
            Education::SomeCollege => "college",
            Education::Bachelors => "university",
            Education::Graduate => "graduate-school",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    Democrat,
    Republican,
    Swing,
}

impl Affiliation {
    pub const ALL: [Affiliation; 3] = [
        Affiliation::Democrat,
        Affiliation::Republican,
        Affiliation::Swing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Affiliation::Democrat => "democrat",
            Affiliation::Republican => "republican",
            Affiliation::Swing => "swing",
        }
    }

    /// Voter-facing stance sentence fragment
    pub fn stance(&self) -> &'static str {
        match self {
            Affiliation::Democrat => "usually lean towards the Democrat party",
            Affiliation::Republican => "usually lean towards the Republican party",
            Affiliation::Swing => {
                "are unsure of whether to vote for the Democrat or Republican party"
            }
        }
    }

    /// Canvasser-facing label
    pub fn voter_label(&self) -> &'static str {
        match self {
            Affiliation::Democrat => "Democrat-leaning Voter",
            Affiliation::Republican => "Republican-leaning Voter",
            Affiliation::Swing => "Swing Voter",
        }
    }
}

impl std::fmt::Display for Affiliation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    ReproductiveRights,
    FreedomOfEnterprise,
    Healthcare,
    Immigration,
    ClimateChange,
    GunRights,
    CostOfLiving,
    Education,
    TaxPolicy,
    CriminalJustice,
}

impl Issue {
    pub const ALL: [Issue; 10] = [
        Issue::ReproductiveRights,
        Issue::FreedomOfEnterprise,
        Issue::Healthcare,
        Issue::Immigration,
        Issue::ClimateChange,
        Issue::GunRights,
        Issue::CostOfLiving,
        Issue::Education,
        Issue::TaxPolicy,
        Issue::CriminalJustice,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Issue::ReproductiveRights => "reproductive rights",
            Issue::FreedomOfEnterprise => "freedom of enterprise",
            Issue::Healthcare => "affordable healthcare",
            Issue::Immigration => "immigration",
            Issue::ClimateChange => "climate change",
            Issue::GunRights => "gun rights",
            Issue::CostOfLiving => "the cost of living",
            Issue::Education => "public education",
            Issue::TaxPolicy => "tax policy",
            Issue::CriminalJustice => "criminal justice reform",
        }
    }
}

/// A generated voter persona (Entity)
///
/// Immutable once generated; one per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterProfile {
    name: String,
    age: u8,
    gender: Gender,
    education: Education,
    state: String,
    affiliation: Affiliation,
    issues: [Issue; 2],
}

impl VoterProfile {
    pub fn new(
        name: impl Into<String>,
        age: u8,
        gender: Gender,
        education: Education,
        state: impl Into<String>,
        affiliation: Affiliation,
        issues: [Issue; 2],
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            education,
            state: state.into(),
            affiliation,
            issues,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn education(&self) -> Education {
        self.education
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn affiliation(&self) -> Affiliation {
        self.affiliation
    }

    pub fn issues(&self) -> &[Issue; 2] {
        &self.issues
    }

    /// Opening line the mark uses to answer the phone
    pub fn greeting(&self) -> String {
        format!("Hello, this is {}.", self.name)
    }
}
