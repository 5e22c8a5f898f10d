use crate::normalize::{NO_DATA, format_date};
use chrono::{DateTime, Local, NaiveDate};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Workflow stage of a task.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Done,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProgress,
        Status::Done,
        Status::Cancelled,
    ];

    /// Canonical label shown to the user and accepted as input.
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pendiente",
            Status::InProgress => "En curso",
            Status::Done => "Terminada",
            Status::Cancelled => "Cancelada",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("'{0}' is not a known task status")]
pub struct ParseStatusError(String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.label().to_lowercase() == wanted)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Perceived effort of a task.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Unaccented spelling people type for [`Difficulty::Easy`].
    const EASY_ALIAS: &'static str = "facil";

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Medio",
            Difficulty::Hard => "Difícil",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("'{0}' is not a known difficulty")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == Difficulty::EASY_ALIAS {
            return Ok(Difficulty::Easy);
        }
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.label().to_lowercase() == wanted)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// A single to-do record.
///
/// Fields are only reachable through getters so a task cannot change after
/// [`crate::TaskRepository`] builds it.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Task {
    id: u32,
    title: String,
    description: String,
    status: Status,
    difficulty: Difficulty,
    created_at: DateTime<Local>,
    last_edited_at: DateTime<Local>,
    due_date: Option<NaiveDate>,
}

impl Task {
    pub(crate) fn new(
        id: u32,
        title: String,
        description: String,
        status: Status,
        difficulty: Difficulty,
        due_date: Option<NaiveDate>,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            status,
            difficulty,
            created_at: now,
            last_edited_at: now,
            due_date,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    // Nothing edits a task yet, so this stays equal to `created_at`.
    pub fn last_edited_at(&self) -> DateTime<Local> {
        self.last_edited_at
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let description = if self.description.is_empty() {
            NO_DATA
        } else {
            self.description.as_str()
        };
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Título: {}", self.title)?;
        writeln!(f, "Descripción: {}", description)?;
        writeln!(f, "Estado: {}", self.status)?;
        writeln!(f, "Dificultad: {}", self.difficulty)?;
        writeln!(f, "Creada: {}", format_date(Some(&self.created_at)))?;
        writeln!(f, "Última edición: {}", format_date(Some(&self.last_edited_at)))?;
        write!(f, "Vencimiento: {}", format_date(self.due_date.as_ref()))
    }
}
