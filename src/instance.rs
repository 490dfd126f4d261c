//! This module defines an abstract representation of a relay instance: the
//! swimmer names and the raw times typed for every swimmer on every leg.

use std::{fs::File, io::BufReader};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RelayError;
use crate::resolution::model::{TimeMatrix, NB_LEGS, NB_SWIMMERS};
use crate::resolution::time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayInstance {
    #[serde(default = "default_names")]
    pub names: Vec<String>,
    /// `times[swimmer][leg]`, in the `M:SS,CC` format
    pub times: Vec<Vec<String>>,
}

fn default_names() -> Vec<String> {
    (1..=NB_SWIMMERS).map(|i| i.to_string()).collect()
}

impl RelayInstance {
    pub fn load(path: &str) -> Result<Self, RelayError> {
        let file = File::open(path).map_err(|e| RelayError::io(path, e))?;
        let instance: RelayInstance = serde_json::from_reader(BufReader::new(file))?;
        instance.validate()?;
        Ok(instance)
    }

    pub fn validate(&self) -> Result<(), RelayError> {
        if self.names.len() != NB_SWIMMERS {
            return Err(RelayError::InvalidShape {
                what: "swimmer names",
                expected: NB_SWIMMERS,
                found: self.names.len(),
            });
        }
        if self.times.len() != NB_SWIMMERS {
            return Err(RelayError::InvalidShape {
                what: "rows of times",
                expected: NB_SWIMMERS,
                found: self.times.len(),
            });
        }
        for row in self.times.iter() {
            if row.len() != NB_LEGS {
                return Err(RelayError::InvalidShape {
                    what: "legs per row",
                    expected: NB_LEGS,
                    found: row.len(),
                });
            }
        }
        Ok(())
    }

    /// Decodes every entry. Entries that are typed but unreadable are
    /// reported and treated as missing.
    pub fn time_matrix(&self) -> TimeMatrix {
        let mut rows = [[None; NB_LEGS]; NB_SWIMMERS];

        for (swimmer, row) in self.times.iter().enumerate().take(NB_SWIMMERS) {
            for (leg, text) in row.iter().enumerate().take(NB_LEGS) {
                let time = time::decode(text);
                if time.is_none() && !text.trim().is_empty() {
                    let name = self.names.get(swimmer).map(String::as_str).unwrap_or_default();
                    warn!(
                        swimmer = swimmer + 1,
                        name,
                        leg = leg + 1,
                        entry = %text,
                        "ignoring invalid time"
                    );
                }
                rows[swimmer][leg] = time;
            }
        }

        TimeMatrix::from_swimmer_rows(rows)
    }
}
