//! Flat-text store: one `;`-delimited file per collection.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use crate::{
    config::TrackerConfig,
    member::Member,
    reservation::Reservation,
};

use super::{
    Loaded, LoadReport, LoadStatus, PersistError, PersistResult, Persistence, SaveReport,
    line::{self, LineError},
};

/// File-backed implementation of [`crate::persist::Persistence`].
///
/// Every save rewrites both files in full. Nothing guards against another
/// process touching the same directory.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    data_dir: PathBuf,
    members_path: PathBuf,
    reservations_path: PathBuf,
}

impl FlatFileStore {
    /// Store using `members.txt` and `reservations.txt` inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::from_config(&TrackerConfig {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..TrackerConfig::default()
        })
    }

    /// Store at the paths named by `config`.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            members_path: config.members_path(),
            reservations_path: config.reservations_path(),
        }
    }

    /// Storage directory, created on first save or load.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the members file.
    pub fn members_path(&self) -> &Path {
        &self.members_path
    }

    /// Path of the reservations file.
    pub fn reservations_path(&self) -> &Path {
        &self.reservations_path
    }

    fn ensure_data_dir(&self) -> PersistResult<()> {
        if self.data_dir.is_dir() {
            return Ok(());
        }
        match fs::create_dir_all(&self.data_dir) {
            Ok(()) => {
                log::info!("created storage directory {}", self.data_dir.display());
                Ok(())
            }
            Err(source) => {
                log::error!(
                    "cannot create storage directory {}: {source}",
                    self.data_dir.display()
                );
                Err(PersistError::CreateDir {
                    path: self.data_dir.clone(),
                    source,
                })
            }
        }
    }

    fn load_members(&self) -> (Vec<Member>, LoadStatus) {
        let mut members = Vec::new();
        let status = read_lines(&self.members_path, |raw| {
            members.push(line::decode_member(raw)?);
            Ok(())
        });
        (members, status)
    }

    fn load_reservations(
        &self,
        lookup: &HashMap<String, usize>,
    ) -> (Vec<Reservation>, LoadStatus, Vec<String>) {
        let mut reservations = Vec::new();
        let mut orphans = Vec::new();
        let status = read_lines(&self.reservations_path, |raw| {
            let decoded = line::decode_reservation(raw)?;
            if !lookup.contains_key(&decoded.member_id) {
                log::warn!(
                    "dropping reservation for unknown member {}",
                    decoded.member_id
                );
                orphans.push(decoded.member_id);
                return Ok(());
            }
            let id = reservations.len();
            reservations.push(Reservation {
                id,
                member_id: decoded.member_id,
                activity: decoded.activity,
                date: decoded.date,
                time: decoded.time,
                status: decoded.status,
            });
            Ok(())
        });
        (reservations, status, orphans)
    }
}

impl Persistence for FlatFileStore {
    fn save(
        &mut self,
        members: &[Member],
        reservations: &[Reservation],
    ) -> PersistResult<SaveReport> {
        self.ensure_data_dir()?;

        let report = SaveReport {
            members: write_lines(&self.members_path, members.iter().map(line::encode_member))
                .err(),
            reservations: write_lines(
                &self.reservations_path,
                reservations.iter().map(line::encode_reservation),
            )
            .err(),
        };

        for err in report.members.iter().chain(report.reservations.iter()) {
            log::error!("save failed: {err}");
        }
        log::debug!(
            "saved {} members and {} reservations",
            members.len(),
            reservations.len()
        );
        Ok(report)
    }

    fn load(&mut self) -> PersistResult<Loaded> {
        self.ensure_data_dir()?;

        let (members, members_status) = self.load_members();
        let lookup: HashMap<String, usize> = members
            .iter()
            .enumerate()
            .map(|(idx, m)| (m.member_id.clone(), idx))
            .collect();
        let (reservations, reservations_status, orphans) = self.load_reservations(&lookup);

        log::info!(
            "loaded {} members and {} reservations",
            members.len(),
            reservations.len()
        );

        Ok(Loaded {
            members,
            reservations,
            report: LoadReport {
                members: members_status,
                reservations: reservations_status,
                orphans,
            },
        })
    }
}

fn write_lines(path: &Path, lines: impl Iterator<Item = String>) -> PersistResult<()> {
    let io_err = |source: io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    for line in lines {
        writeln!(out, "{line}").map_err(io_err)?;
    }
    out.flush().map_err(io_err)
}

/// Feeds every non-blank line of `path` to `on_line`, stopping at the first
/// failure. The file handle is closed before returning.
fn read_lines(path: &Path, mut on_line: impl FnMut(&str) -> Result<(), LineError>) -> LoadStatus {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found, starting empty", path.display());
            return LoadStatus::Missing;
        }
        Err(source) => {
            return failed(PersistError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                return failed(PersistError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Err(reason) = on_line(&line) {
            return failed(PersistError::Malformed {
                path: path.to_path_buf(),
                line: idx + 1,
                reason,
            });
        }
    }
    LoadStatus::Loaded
}

fn failed(err: PersistError) -> LoadStatus {
    log::error!("load stopped: {err}");
    LoadStatus::Failed(err)
}
