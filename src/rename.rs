#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Column '{name}' is to be dropped but could not be found after renaming")]
    MissingColumn { name: String },
    #[error("Renaming produced the column '{name}' more than once")]
    DuplicateColumn { name: String },
}

/// Item codes of the cultural interests questionnaire, as group letter and amount of items in the group.
const ITEM_GROUPS: [(char, usize); 5] = [('A', 3), ('B', 3), ('C', 3), ('D', 3), ('E', 4)];

/// An ordered list of `(old name, new name)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pairs: Vec<(String, String)>,
}

impl Mapping {
    pub fn new<Old, New>(pairs: impl IntoIterator<Item = (Old, New)>) -> Self
    where
        Old: Into<String>,
        New: Into<String>,
    {
        Mapping {
            pairs: pairs
                .into_iter()
                .map(|(old, new)| (old.into(), new.into()))
                .collect(),
        }
    }

    /// Return the new name for the column `old`, or `None` if it should keep its name.
    pub fn get(&self, old: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find_map(|(from, to)| (from == old).then_some(to.as_str()))
    }

    /// Return a mapping which undoes the renames of this one.
    pub fn inverse(&self) -> Mapping {
        Mapping::new(self.pairs.iter().map(|(old, new)| (new.as_str(), old.as_str())))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(old, new)| (old.as_str(), new.as_str()))
    }
}

/// The names used in the cultural interests ("chare") export, mapped to their short codes.
impl Default for Mapping {
    fn default() -> Self {
        let demographics = [
            ("codice_partecipante", "ID"),
            ("età", "Age"),
            ("Gnr", "Sex"),
            ("Istr", "Edu"),
        ]
        .map(|(old, new)| (old.to_owned(), new.to_owned()));
        let items = ITEM_GROUPS
            .iter()
            .flat_map(|&(group, count)| (1..=count).map(move |item| format!("{group}{item}")))
            .enumerate()
            .map(|(idx, code)| (format!("P_cultur_1_{}", idx + 1), code));
        let average = ("Media Interessi Culturali".to_owned(), "Avg Chare".to_owned());

        Mapping::new(
            demographics
                .into_iter()
                .chain(items)
                .chain(std::iter::once(average)),
        )
    }
}

#[derive(Clone, Debug)]
pub struct Options {
    pub mapping: Mapping,
    /// Columns to remove after renaming, by their new name.
    pub drop_columns: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            mapping: Mapping::default(),
            drop_columns: vec!["Avg Chare".into()],
        }
    }
}

pub(crate) mod function {
    use crate::rename::{Error, Options};
    use crate::Table;
    use std::collections::HashSet;

    /// Rename the columns of `table` according to `mapping` and remove the `drop_columns` thereafter.
    ///
    /// Columns not in the mapping keep their name, and mapped names without a column are ignored.
    pub fn rename(
        mut table: Table,
        Options {
            mapping,
            drop_columns,
        }: Options,
    ) -> Result<Table, Error> {
        for name in table.headers_mut() {
            if let Some(new_name) = mapping.get(name) {
                *name = new_name.to_owned();
            }
        }

        let mut seen = HashSet::new();
        if let Some(name) = table.headers().iter().find(|name| !seen.insert(*name)) {
            return Err(Error::DuplicateColumn { name: name.clone() });
        }

        for name in drop_columns {
            if table.remove_column(&name).is_none() {
                return Err(Error::MissingColumn { name });
            }
            log::debug!("Dropped column '{name}'");
        }
        Ok(table)
    }
}
