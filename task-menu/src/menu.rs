use crate::Error;
use crate::repository::TaskRepository;
use crate::task::{Status, Task};
use crate::terminal::Terminal;
use log::{debug, info};

pub const ROOT_MENU: &str = "\n=== Gestor de tareas ===\n\
    1. Ver tareas\n\
    2. Agregar tarea\n\
    0. Salir";
pub const VIEW_MENU: &str = "\n--- Ver tareas ---\n\
    1. Todas\n\
    2. Pendientes\n\
    3. En curso\n\
    4. Terminadas\n\
    5. Canceladas\n\
    0. Volver";
pub const CHOICE_PROMPT: &str = "Elegí una opción: ";
pub const DETAIL_PROMPT: &str = "Id de la tarea para ver el detalle (0 para volver): ";
pub const INVALID_OPTION: &str = "Opción inválida.";
pub const NO_TASKS: &str = "No hay tareas para mostrar.";
pub const GOODBYE: &str = "¡Hasta luego!";

const TITLE_PROMPT: &str = "Título: ";
const DESCRIPTION_PROMPT: &str = "Descripción (opcional): ";
const DIFFICULTY_PROMPT: &str = "Dificultad (Fácil/Medio/Difícil): ";
const DUE_DATE_PROMPT: &str = "Vencimiento (AAAA-MM-DD, opcional): ";
const STATUS_PROMPT: &str = "Estado (Pendiente/En curso/Terminada/Cancelada, opcional): ";

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
enum RootChoice {
    ViewTasks,
    AddTask,
    Exit,
}

impl RootChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(RootChoice::ViewTasks),
            "2" => Some(RootChoice::AddTask),
            "0" => Some(RootChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
enum ViewChoice {
    All,
    ByStatus(Status),
    Back,
}

impl ViewChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(ViewChoice::All),
            "2" => Some(ViewChoice::ByStatus(Status::Pending)),
            "3" => Some(ViewChoice::ByStatus(Status::InProgress)),
            "4" => Some(ViewChoice::ByStatus(Status::Done)),
            "5" => Some(ViewChoice::ByStatus(Status::Cancelled)),
            "0" => Some(ViewChoice::Back),
            _ => None,
        }
    }
}

/// Drives the nested text menus against a [`TaskRepository`].
///
/// The loop in [`MenuController::run`] only stops once the user picks the
/// exit option or the terminal runs out of input.
pub struct MenuController<'a, T: Terminal> {
    repository: &'a mut TaskRepository,
    terminal: T,
    should_exit: bool,
}

impl<'a, T: Terminal> MenuController<'a, T> {
    pub fn new(repository: &'a mut TaskRepository, terminal: T) -> Self {
        Self {
            repository,
            terminal,
            should_exit: false,
        }
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    pub fn run(&mut self) -> Result<(), Error> {
        while !self.should_exit {
            self.terminal.print(ROOT_MENU)?;
            let Some(input) = self.read(CHOICE_PROMPT)? else {
                break;
            };
            match RootChoice::parse(&input) {
                Some(RootChoice::ViewTasks) => self.view_tasks()?,
                Some(RootChoice::AddTask) => self.add_task()?,
                Some(RootChoice::Exit) => self.should_exit = true,
                None => self.invalid_option(&input)?,
            }
        }
        self.terminal.print(GOODBYE)
    }

    fn view_tasks(&mut self) -> Result<(), Error> {
        while !self.should_exit {
            self.terminal.print(VIEW_MENU)?;
            let Some(input) = self.read(CHOICE_PROMPT)? else {
                break;
            };
            match ViewChoice::parse(&input) {
                Some(ViewChoice::All) => self.show_tasks(None)?,
                Some(ViewChoice::ByStatus(status)) => self.show_tasks(Some(status))?,
                Some(ViewChoice::Back) => break,
                None => self.invalid_option(&input)?,
            }
        }
        Ok(())
    }

    fn show_tasks(&mut self, status: Option<Status>) -> Result<(), Error> {
        debug!(
            "Listing tasks with status {}",
            status.map_or("any", Status::label)
        );
        let lines: Vec<String> = self
            .repository
            .list_tasks(status)
            .into_iter()
            .map(|task| format!("[{}] {}", task.id(), task.title()))
            .collect();
        if lines.is_empty() {
            return self.terminal.print(NO_TASKS);
        }
        for line in &lines {
            self.terminal.print(line)?;
        }

        let Some(input) = self.read(DETAIL_PROMPT)? else {
            return Ok(());
        };
        // 0, unknown ids and anything non-numeric go back without a word
        let detail = input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|id| *id != 0)
            .and_then(|id| self.repository.find_task(id))
            .map(Task::to_string);
        match detail {
            Some(detail) => self.terminal.print(&detail),
            None => Ok(()),
        }
    }

    fn add_task(&mut self) -> Result<(), Error> {
        let Some(title) = self.read(TITLE_PROMPT)? else {
            return Ok(());
        };
        let Some(description) = self.read(DESCRIPTION_PROMPT)? else {
            return Ok(());
        };
        let Some(difficulty) = self.read(DIFFICULTY_PROMPT)? else {
            return Ok(());
        };
        let Some(due_date) = self.read(DUE_DATE_PROMPT)? else {
            return Ok(());
        };
        let Some(status) = self.read(STATUS_PROMPT)? else {
            return Ok(());
        };

        let id = self
            .repository
            .create_task(&title, &description, &difficulty, &due_date, &status)
            .id();
        info!("Task {} added", id);
        self.terminal.print(&format!("Tarea creada con id {}.", id))
    }

    fn invalid_option(&mut self, input: &str) -> Result<(), Error> {
        debug!("Invalid menu choice '{}'", input);
        self.terminal.print(INVALID_OPTION)
    }

    /// Reads one line; running out of input counts as asking to exit.
    fn read(&mut self, message: &str) -> Result<Option<String>, Error> {
        let line = self.terminal.prompt(message)?;
        if line.is_none() {
            info!("Input closed, leaving the menu");
            self.should_exit = true;
        }
        Ok(line)
    }
}
