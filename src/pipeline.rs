use crate::{rename, scores, sheet};
use std::path::PathBuf;

pub const DEFAULT_CHARE_PATH: &str = "survey-2406/rawdata/chare.xlsx";
pub const DEFAULT_GENERAL_PATH: &str = "survey-2406/rawdata/general.xlsx";
pub const DEFAULT_OUTPUT_PATH: &str = "survey-2406/chare_clean.xlsx";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not load the {kind} table from '{path}'")]
    Load {
        kind: &'static str,
        path: PathBuf,
        source: sheet::Error,
    },
    #[error("Could not save the merged table to '{path}'")]
    Save { path: PathBuf, source: sheet::Error },
    #[error(transparent)]
    Rename(#[from] rename::Error),
    #[error(transparent)]
    Scores(#[from] scores::Error),
}

/// The locations of the input spreadsheets and of the merged output.
#[derive(Clone, Debug)]
pub struct Paths {
    /// The cultural interests answers, one row per participant.
    pub chare: PathBuf,
    /// The general questionnaire, with one row per participant among many other columns.
    pub general: PathBuf,
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            chare: DEFAULT_CHARE_PATH.into(),
            general: DEFAULT_GENERAL_PATH.into(),
            output: DEFAULT_OUTPUT_PATH.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Options {
    pub rename: rename::Options,
    pub scores: scores::Options,
}

pub(crate) mod function {
    use crate::pipeline::{Error, Options, Paths};
    use crate::{sheet, Table};
    use std::path::Path;

    /// Load both tables, merge them with [`transform()`] and write the result to `paths.output` once.
    ///
    /// The merged table is returned as well.
    pub fn run(
        Paths {
            chare,
            general,
            output,
        }: &Paths,
        options: Options,
    ) -> Result<Table, Error> {
        let chare = load(chare, "chare")?;
        let general = load(general, "general")?;

        let table = transform(chare, &general, options)?;
        sheet::write(&table, output).map_err(|source| Error::Save {
            path: output.clone(),
            source,
        })?;
        log::info!(
            "Wrote {} participants with {} columns to '{}'",
            table.len(),
            table.headers().len(),
            output.display()
        );
        Ok(table)
    }

    /// Rename the columns of `chare` and extend it with the art scores taken from `general`.
    pub fn transform(
        chare: Table,
        general: &Table,
        Options { rename, scores }: Options,
    ) -> Result<Table, Error> {
        let table = crate::rename(chare, rename)?;
        Ok(crate::derive_scores(table, general, scores)?)
    }

    fn load(path: &Path, kind: &'static str) -> Result<Table, Error> {
        let table = sheet::read(path).map_err(|source| Error::Load {
            kind,
            path: path.to_owned(),
            source,
        })?;
        log::info!(
            "Loaded {} rows with {} columns of the {kind} table from '{}'",
            table.len(),
            table.headers().len(),
            path.display()
        );
        Ok(table)
    }
}
