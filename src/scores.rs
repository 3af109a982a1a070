#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The {kind} column '{name}' could not be found")]
    MissingColumn { name: String, kind: &'static str },
    #[error("Row in line {line} does not have a participant identifier")]
    MissingIdentifier { line: usize },
    #[error("Participant '{id}' in line {line} could not be found in the general table")]
    UnknownParticipant { id: String, line: usize },
    #[error("Value '{value}' in column '{column}' of participant '{id}' is not a number")]
    NotANumber {
        id: String,
        column: String,
        value: String,
    },
}

#[derive(Clone, Debug)]
pub struct Options {
    /// The column with the participant identifier in the table to extend.
    pub id_column: String,
    /// The column with the participant identifier in the general table.
    pub general_id_column: String,
    /// Items of the art experience questionnaire, to be averaged.
    pub experience_columns: Vec<String>,
    /// The precomputed average of the artistic activities questionnaire.
    pub activities_column: String,
    /// The precomputed sum of the art style recognition questionnaire.
    pub recognition_column: String,
    pub experience_output: String,
    pub activities_output: String,
    pub recognition_output: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            id_column: "ID".into(),
            general_id_column: "codice_partecipante".into(),
            experience_columns: (1..=10).map(|item| format!("Q1_{item}")).collect(),
            activities_column: "Questionario Interessi artistici media".into(),
            recognition_column: "Somma_Riconoscimento stili artistici".into(),
            experience_output: "Avg Art Experience".into(),
            activities_output: "Avg Art Activities".into(),
            recognition_output: "Avg Art Recognition".into(),
        }
    }
}

pub(crate) mod function {
    use crate::scores::{Error, Options};
    use crate::{Cell, Table};
    use std::collections::HashMap;

    /// Extend each row of `table` with the art scores of the participant's row in `general`.
    ///
    /// If a participant appears more than once in `general`, its first row is used.
    pub fn derive_scores(
        mut table: Table,
        general: &Table,
        Options {
            id_column,
            general_id_column,
            experience_columns,
            activities_column,
            recognition_column,
            experience_output,
            activities_output,
            recognition_output,
        }: Options,
    ) -> Result<Table, Error> {
        let id_index = column_index(&table, &id_column, "identifier")?;
        let general_id_index = column_index(general, &general_id_column, "general identifier")?;
        let experience_indices = experience_columns
            .iter()
            .map(|name| column_index(general, name, "art experience"))
            .collect::<Result<Vec<_>, _>>()?;
        let activities_index = column_index(general, &activities_column, "art activities")?;
        let recognition_index = column_index(general, &recognition_column, "art recognition")?;

        let participants = index_by_key(general, general_id_index);
        let mut experience = Vec::with_capacity(table.len());
        let mut activities = Vec::with_capacity(table.len());
        let mut recognition = Vec::with_capacity(table.len());
        for (row_index, row) in table.rows().iter().enumerate() {
            // the header occupies the first line
            let line = row_index + 2;
            let id = row[id_index]
                .key()
                .ok_or(Error::MissingIdentifier { line })?;
            let general_row = participants
                .get(&id)
                .map(|&index| &general.rows()[index])
                .ok_or_else(|| Error::UnknownParticipant {
                    id: id.clone(),
                    line,
                })?;

            let mut sum = 0.0;
            let mut unanswered = 0;
            for (&index, name) in experience_indices.iter().zip(&experience_columns) {
                let cell = &general_row[index];
                if cell.is_empty() {
                    log::warn!("Participant '{id}' did not answer '{name}'");
                    unanswered += 1;
                    continue;
                }
                sum += cell.as_number().ok_or_else(|| Error::NotANumber {
                    id: id.clone(),
                    column: name.clone(),
                    value: cell.to_string(),
                })?;
            }
            // a single unanswered item leaves the average undefined
            let mean = if experience_indices.is_empty() || unanswered > 0 {
                Cell::Empty
            } else {
                Cell::Number(sum / experience_indices.len() as f64)
            };
            log::debug!("Participant '{id}' has an average art experience of {mean}");

            experience.push(mean);
            activities.push(general_row[activities_index].clone());
            recognition.push(general_row[recognition_index].clone());
        }

        table.set_column(experience_output, experience);
        table.set_column(activities_output, activities);
        table.set_column(recognition_output, recognition);
        Ok(table)
    }

    fn column_index(table: &Table, name: &str, kind: &'static str) -> Result<usize, Error> {
        table
            .column_index(name)
            .ok_or_else(|| Error::MissingColumn {
                name: name.to_owned(),
                kind,
            })
    }

    /// Map each participant key to the index of the first row it appears in.
    fn index_by_key(table: &Table, key_index: usize) -> HashMap<String, usize> {
        let mut out = HashMap::with_capacity(table.len());
        for (index, row) in table.rows().iter().enumerate() {
            let Some(key) = row[key_index].key() else {
                continue;
            };
            if let Some(first) = out.get(&key) {
                log::warn!(
                    "Participant '{key}' in line {} was already seen in line {}, using the first one",
                    index + 2,
                    first + 2
                );
                continue;
            }
            out.insert(key, index);
        }
        out
    }
}
