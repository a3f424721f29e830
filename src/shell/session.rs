use std::fmt;
use std::io::{self, BufRead, Write};

use crate::{
    core::registry::{Registry, RegistryError},
    member::MemberDraft,
    reservation::ReservationDraft,
    types::{ReservationId, ReservationStatus},
};

use super::menu::{MenuChoice, capitalize};

/// Condition that ends the menu loop.
#[derive(Debug)]
pub enum ShellError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// The registry hit a fatal storage failure.
    Fatal(RegistryError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console I/O failed: {err}"),
            Self::Fatal(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Fatal(err) => Some(err),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Menu loop reading answers from `input` and rendering to `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Shell over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the exit option is chosen or input ends.
    ///
    /// Validation failures are printed and the menu is shown again. Only
    /// console I/O errors and fatal storage failures end the loop with `Err`.
    pub fn run(&mut self, registry: &mut Registry) -> Result<(), ShellError> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.ask("\nChoose an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::RegisterMember) => self.register_member(registry)?,
                Some(MenuChoice::AddReservation) => self.add_reservation(registry)?,
                Some(MenuChoice::ListReservations) => self.list_reservations(registry)?,
                Some(MenuChoice::UpdateStatus) => self.update_status(registry)?,
                Some(MenuChoice::ActiveReport) => self.active_report(registry)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "\n[Info] Thanks for using the tracker. Goodbye!")?;
                    Flow::Exit
                }
                None => {
                    writeln!(self.output, "\n[Error] Invalid option, please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- GYM RESERVATIONS ---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Prompts and reads one line without its line ending; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn fail(&mut self, err: RegistryError) -> Result<Flow, ShellError> {
        if let RegistryError::Persist(_) = err {
            return Err(ShellError::Fatal(err));
        }
        writeln!(self.output, "\n[Error] {err}")?;
        Ok(Flow::Continue)
    }

    fn register_member(&mut self, registry: &mut Registry) -> Result<Flow, ShellError> {
        writeln!(self.output, "\n--- Member registration ---")?;
        let Some(name) = self.ask("Full name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(member_id) = self.ask("Identifier (e.g. 123.456.789-00): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.ask("Age: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(age) = age.trim().parse::<i64>() else {
            writeln!(self.output, "\n[Error] Invalid age, it must be a whole number.")?;
            return Ok(Flow::Continue);
        };
        let Some(plan) = self.ask("Plan (Monthly, Quarterly, ...): ")? else {
            return Ok(Flow::Exit);
        };

        match registry.register_member(MemberDraft {
            name,
            member_id,
            age,
            plan,
        }) {
            Ok(member) => {
                writeln!(self.output, "\n[Success] Member '{}' registered.", member.name)?;
                Ok(Flow::Continue)
            }
            Err(err) => self.fail(err),
        }
    }

    fn add_reservation(&mut self, registry: &mut Registry) -> Result<Flow, ShellError> {
        writeln!(self.output, "\n--- New class booking ---")?;
        let Some(member_id) = self.ask("Member identifier: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(activity) = self.ask("Activity (e.g. Yoga, Swimming): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.ask("Date (DD/MM/YYYY): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(time) = self.ask("Time (HH:MM): ")? else {
            return Ok(Flow::Exit);
        };

        match registry.add_reservation(ReservationDraft {
            member_id,
            activity,
            date,
            time,
        }) {
            Ok(reservation) => {
                let name = registry
                    .member_of(&reservation)
                    .map(|m| m.name.as_str())
                    .unwrap_or_default();
                writeln!(
                    self.output,
                    "\n[Success] '{}' booked for '{name}'.",
                    reservation.activity
                )?;
                Ok(Flow::Continue)
            }
            Err(err) => self.fail(err),
        }
    }

    fn list_reservations(&mut self, registry: &Registry) -> Result<Flow, ShellError> {
        writeln!(self.output, "\n--- Current reservations ---")?;
        if registry.reservations().is_empty() {
            writeln!(self.output, "[Info] No reservations yet.")?;
            return Ok(Flow::Continue);
        }
        for res in registry.reservations() {
            let name = registry
                .member_of(res)
                .map(|m| m.name.as_str())
                .unwrap_or_default();
            writeln!(
                self.output,
                "- Member: {name} | Activity: {} | Date: {} | Time: {} | Status: {}",
                res.activity, res.date, res.time, res.status
            )?;
        }
        Ok(Flow::Continue)
    }

    fn update_status(&mut self, registry: &mut Registry) -> Result<Flow, ShellError> {
        writeln!(self.output, "\n--- Update reservation status ---")?;
        let Some(member_id) = self.ask("Member identifier: ")? else {
            return Ok(Flow::Exit);
        };

        let found: Vec<ReservationId> = registry
            .reservations_for_member(&member_id)
            .into_iter()
            .map(|r| r.id)
            .collect();
        if found.is_empty() {
            writeln!(self.output, "\n[Info] No reservations found for this identifier.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nReservations for this member:")?;
        for (idx, id) in found.iter().enumerate() {
            if let Some(res) = registry.reservation(*id) {
                writeln!(
                    self.output,
                    "  {}. Activity: {} | Date: {} | Current status: {}",
                    idx + 1,
                    res.activity,
                    res.date,
                    res.status
                )?;
            }
        }

        let Some(choice) =
            self.ask("\nNumber of the reservation to change (0 to go back): ")?
        else {
            return Ok(Flow::Exit);
        };
        let target = match choice.trim().parse::<usize>() {
            Ok(0) => return Ok(Flow::Continue),
            Ok(n) => found.get(n - 1).copied(),
            Err(_) => None,
        };
        let Some(target) = target else {
            writeln!(self.output, "\n[Error] Invalid choice.")?;
            return Ok(Flow::Continue);
        };

        let labels = ReservationStatus::ALL.map(|s| s.as_str()).join(", ");
        let Some(status) = self.ask(&format!("New status ({labels}): "))? else {
            return Ok(Flow::Exit);
        };

        let status = capitalize(&status);
        match registry.update_reservation_status(target, &status) {
            Ok(()) => {
                writeln!(self.output, "\n[Success] Status updated to '{status}'.")?;
                Ok(Flow::Continue)
            }
            Err(err) => self.fail(err),
        }
    }

    fn active_report(&mut self, registry: &Registry) -> Result<Flow, ShellError> {
        writeln!(self.output, "\n--- Active reservations per member ---")?;
        let report = registry.active_count_report();
        if report.is_empty() {
            writeln!(self.output, "[Info] No members registered yet.")?;
            return Ok(Flow::Continue);
        }
        for (name, count) in report.iter() {
            writeln!(self.output, "- {name}: {count} active")?;
        }
        Ok(Flow::Continue)
    }
}
