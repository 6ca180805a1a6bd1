//! Score aggregation for resume quality
//!
//! Every check contributes one [`ScoreInput`]. The calculator starts from 100,
//! walks the categories in a fixed order and applies at most one deduction or
//! bonus per band, then clamps to 0-100.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

const BASE_SCORE: i32 = 100;

/// Scoring category, one per check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Contact,
    Sections,
    Length,
    ActionVerbs,
    Quantifiable,
    Skills,
    Spelling,
    Readability,
    FirstPerson,
    Dates,
}

impl Category {
    /// All categories in scoring order
    pub const ALL: [Category; 10] = [
        Category::Contact,
        Category::Sections,
        Category::Length,
        Category::ActionVerbs,
        Category::Quantifiable,
        Category::Skills,
        Category::Spelling,
        Category::Readability,
        Category::FirstPerson,
        Category::Dates,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Contact => write!(f, "contact"),
            Category::Sections => write!(f, "sections"),
            Category::Length => write!(f, "length"),
            Category::ActionVerbs => write!(f, "action-verbs"),
            Category::Quantifiable => write!(f, "quantifiable"),
            Category::Skills => write!(f, "skills"),
            Category::Spelling => write!(f, "spelling"),
            Category::Readability => write!(f, "readability"),
            Category::FirstPerson => write!(f, "first-person"),
            Category::Dates => write!(f, "dates"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub email_found: bool,
    pub phone_found: bool,
    pub linkedin_found: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionsInput {
    pub required_found: usize,
    pub total_required: usize,
}

impl SectionsInput {
    /// Fraction of required sections found; an empty requirement counts as complete
    pub fn ratio(&self) -> f64 {
        if self.total_required == 0 {
            1.0
        } else {
            self.required_found as f64 / self.total_required as f64
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthInput {
    pub word_count: usize,
    pub length_ok: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsInput {
    pub section_present: bool,
    pub tech_skill_count: usize,
}

/// Structured output of one check, consumed by [`ScoreCalculator`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum ScoreInput {
    Contact(ContactInput),
    Sections(SectionsInput),
    Length(LengthInput),
    ActionVerbs { count: usize },
    Quantifiable { count: usize },
    Skills(SkillsInput),
    Spelling { misspelled_count: usize },
    Readability { flesch_score: f64 },
    FirstPerson { count: usize },
    Dates { count: usize },
}

impl ScoreInput {
    pub fn category(&self) -> Category {
        match self {
            ScoreInput::Contact(_) => Category::Contact,
            ScoreInput::Sections(_) => Category::Sections,
            ScoreInput::Length(_) => Category::Length,
            ScoreInput::ActionVerbs { .. } => Category::ActionVerbs,
            ScoreInput::Quantifiable { .. } => Category::Quantifiable,
            ScoreInput::Skills(_) => Category::Skills,
            ScoreInput::Spelling { .. } => Category::Spelling,
            ScoreInput::Readability { .. } => Category::Readability,
            ScoreInput::FirstPerson { .. } => Category::FirstPerson,
            ScoreInput::Dates { .. } => Category::Dates,
        }
    }
}

/// Score inputs collected during one analysis, keyed by category
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    inputs: BTreeMap<Category, ScoreInput>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an input under its category, replacing any earlier one
    pub fn record(&mut self, input: ScoreInput) {
        self.inputs.insert(input.category(), input);
    }

    pub fn get(&self, category: Category) -> Option<&ScoreInput> {
        self.inputs.get(&category)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl FromIterator<ScoreInput> for ScoreSheet {
    fn from_iter<I: IntoIterator<Item = ScoreInput>>(iter: I) -> Self {
        let mut sheet = ScoreSheet::new();
        for input in iter {
            sheet.record(input);
        }
        sheet
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("no score input recorded for category '{0}'")]
    MissingInput(Category),
}

/// One deduction (negative) or bonus (positive) applied to the base score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub category: Category,
    pub points: i32,
    pub reason: String,
}

impl Adjustment {
    fn new(category: Category, points: i32, reason: impl Into<String>) -> Self {
        Self {
            category,
            points,
            reason: reason.into(),
        }
    }
}

/// Final score plus the adjustments behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Clamped score (0-100)
    pub score: u8,
    /// Unclamped base + bonuses - deductions
    pub raw: i32,
    pub adjustments: Vec<Adjustment>,
}

impl ScoreReport {
    pub fn deductions(&self) -> i32 {
        self.adjustments
            .iter()
            .filter(|a| a.points < 0)
            .map(|a| -a.points)
            .sum()
    }

    pub fn bonuses(&self) -> i32 {
        self.adjustments
            .iter()
            .filter(|a| a.points > 0)
            .map(|a| a.points)
            .sum()
    }
}

/// Calculator for resume scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Aggregate all category inputs into a clamped 0-100 score
    pub fn calculate(sheet: &ScoreSheet) -> Result<ScoreReport, ScoreError> {
        let mut adjustments = Vec::new();
        for category in Category::ALL {
            let input = sheet
                .get(category)
                .ok_or(ScoreError::MissingInput(category))?;
            Self::adjust(input, &mut adjustments);
        }

        let raw = BASE_SCORE + adjustments.iter().map(|a| a.points).sum::<i32>();
        let score = raw.clamp(0, 100) as u8;
        tracing::debug!(raw, score, adjustments = adjustments.len(), "score calculated");
        Ok(ScoreReport {
            score,
            raw,
            adjustments,
        })
    }

    fn adjust(input: &ScoreInput, out: &mut Vec<Adjustment>) {
        let category = input.category();
        let mut push = |points: i32, reason: &str| out.push(Adjustment::new(category, points, reason));

        match *input {
            ScoreInput::Contact(contact) => {
                if !contact.email_found {
                    push(-10, "no email address");
                }
                if !contact.phone_found {
                    push(-10, "no phone number");
                }
                if !contact.linkedin_found {
                    push(-3, "no LinkedIn profile");
                }
            }
            ScoreInput::Sections(sections) => {
                let ratio = sections.ratio();
                if ratio < 0.5 {
                    push(-15, "fewer than half of the standard sections");
                } else if ratio < 0.75 {
                    push(-10, "fewer than three quarters of the standard sections");
                } else if ratio < 1.0 {
                    push(-5, "a standard section is missing");
                } else {
                    push(2, "all standard sections present");
                }
            }
            ScoreInput::Length(length) => {
                if !length.length_ok {
                    push(-5, "length outside 250-800 words");
                }
                if (400..=700).contains(&length.word_count) {
                    push(2, "length in the 400-700 word sweet spot");
                }
            }
            ScoreInput::ActionVerbs { count } => {
                if count < 5 {
                    push(-8, "fewer than 5 action verbs");
                } else if count < 10 {
                    push(-5, "fewer than 10 action verbs");
                } else if count < 15 {
                    push(-2, "fewer than 15 action verbs");
                } else if count >= 20 {
                    push(3, "20 or more action verbs");
                }
            }
            ScoreInput::Quantifiable { count } => {
                if count == 0 {
                    push(-18, "no quantifiable achievements");
                } else if count < 2 {
                    push(-10, "only one quantifiable achievement");
                } else if count < 4 {
                    push(-5, "fewer than 4 quantifiable achievements");
                } else if count >= 5 {
                    push(5, "5 or more quantifiable achievements");
                }
            }
            ScoreInput::Skills(skills) => {
                if !skills.section_present {
                    push(-7, "no skills section");
                } else if skills.tech_skill_count < 3 {
                    push(-4, "fewer than 3 technical skills");
                } else if skills.tech_skill_count < 5 {
                    push(-2, "fewer than 5 technical skills");
                } else if skills.tech_skill_count >= 10 {
                    push(2, "10 or more technical skills");
                }
            }
            ScoreInput::Spelling { misspelled_count } => {
                if misspelled_count > 5 {
                    push(-12, "more than 5 possible misspellings");
                } else if misspelled_count > 2 {
                    push(-7, "more than 2 possible misspellings");
                } else if misspelled_count > 0 {
                    push(-3, "possible misspellings");
                }
            }
            ScoreInput::Readability { flesch_score } => {
                if flesch_score < 30.0 {
                    push(-8, "very low readability");
                } else if flesch_score < 50.0 {
                    push(-5, "low readability");
                } else if flesch_score < 60.0 {
                    push(-2, "fairly difficult readability");
                } else if flesch_score >= 70.0 {
                    push(2, "easy readability");
                }
            }
            ScoreInput::FirstPerson { count } => {
                if count > 5 {
                    push(-5, "heavy first-person usage");
                } else if count > 2 {
                    push(-2, "some first-person usage");
                }
            }
            ScoreInput::Dates { count } => {
                if count < 2 {
                    push(-4, "fewer than 2 recognizable dates");
                } else if count < 4 {
                    push(-2, "fewer than 4 recognizable dates");
                }
            }
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_sheet() -> impl Strategy<Value = ScoreSheet> {
        (
            (any::<bool>(), any::<bool>(), any::<bool>()),
            (0usize..6, 0usize..6),
            0usize..2000,
            (0usize..60, 0usize..20),
            (any::<bool>(), 0usize..40),
            0usize..30,
            -100.0f64..130.0,
            (0usize..20, 0usize..20),
        )
            .prop_map(
                |(contact, sections, words, (verbs, quantified), skills, misspelled, flesch, (fp, dates))| {
                    [
                        ScoreInput::Contact(ContactInput {
                            email_found: contact.0,
                            phone_found: contact.1,
                            linkedin_found: contact.2,
                        }),
                        ScoreInput::Sections(SectionsInput {
                            required_found: sections.0.min(sections.1),
                            total_required: sections.1,
                        }),
                        ScoreInput::Length(LengthInput {
                            word_count: words,
                            length_ok: (250..=800).contains(&words),
                        }),
                        ScoreInput::ActionVerbs { count: verbs },
                        ScoreInput::Quantifiable { count: quantified },
                        ScoreInput::Skills(SkillsInput {
                            section_present: skills.0,
                            tech_skill_count: skills.1,
                        }),
                        ScoreInput::Spelling {
                            misspelled_count: misspelled,
                        },
                        ScoreInput::Readability {
                            flesch_score: flesch,
                        },
                        ScoreInput::FirstPerson { count: fp },
                        ScoreInput::Dates { count: dates },
                    ]
                    .into_iter()
                    .collect()
                },
            )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn score_always_within_bounds(ref sheet in arbitrary_sheet()) {
            let report = ScoreCalculator::calculate(sheet).unwrap();
            prop_assert!(report.score <= 100);
            prop_assert_eq!(report.score as i32, report.raw.clamp(0, 100));
        }

        #[test]
        fn score_is_base_plus_adjustments(ref sheet in arbitrary_sheet()) {
            let report = ScoreCalculator::calculate(sheet).unwrap();
            prop_assert_eq!(report.raw, 100 - report.deductions() + report.bonuses());
        }

        #[test]
        fn at_most_one_adjustment_per_banded_category(ref sheet in arbitrary_sheet()) {
            let report = ScoreCalculator::calculate(sheet).unwrap();
            for category in [
                Category::Sections,
                Category::ActionVerbs,
                Category::Quantifiable,
                Category::Skills,
                Category::Spelling,
                Category::Readability,
                Category::FirstPerson,
                Category::Dates,
            ] {
                let n = report.adjustments.iter().filter(|a| a.category == category).count();
                prop_assert!(n <= 1);
            }
        }
    }
}
