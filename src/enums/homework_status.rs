use strum_macros::{Display, EnumIter, EnumString};

/// The review status of a homework.
#[derive(Debug, Display, EnumString, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
#[strum(serialize_all = "snake_case")]
pub enum HomeworkStatus {
    /// The reviewer accepted the work.
    Approved,
    /// The work was taken for review.
    Reviewing,
    /// The reviewer left remarks.
    Rejected,
}

impl HomeworkStatus {
    /// The verdict phrase shown to the student.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
