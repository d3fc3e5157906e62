//! Entity trait implementation for the Film domain type.
//!
//! Holds the film validation rules and the merge applied by updates. See the
//! trait implementation on [`Film`] for method documentation.

use super::FilmError;
use crate::model::{non_blank, Film, FilmCreate, FilmId, FilmUpdate};
use actor_framework::{ActorEntity, Peers};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Earliest accepted release date: the first public film screening.
pub fn min_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

#[async_trait]
impl ActorEntity for Film {
    type Id = FilmId;
    type Create = FilmCreate;
    type Update = FilmUpdate;
    type Context = ();
    type Error = FilmError;

    /// Builds a film from a create request.
    ///
    /// # Rules
    /// - `name`: required, not blank
    /// - `description`: at most [`MAX_DESCRIPTION_LENGTH`] characters, empty if absent
    /// - `releaseDate`: required, not before [`min_release_date`]
    /// - `duration`: required, positive
    fn from_create_params(id: FilmId, params: FilmCreate) -> Result<Self, FilmError> {
        let name = non_blank(params.name)
            .ok_or_else(|| FilmError::validation("film name must not be blank"))?;

        let description = params.description.unwrap_or_default();
        validate_description(&description)?;

        let release_date = params
            .release_date
            .ok_or_else(|| FilmError::validation("release date is required"))?;
        validate_release_date(release_date)?;

        let duration = params
            .duration
            .ok_or_else(|| FilmError::validation("duration is required"))?;
        let duration = validate_duration(duration)?;

        Ok(Self {
            id,
            name,
            description,
            release_date,
            duration,
        })
    }

    /// Merges an update into the stored film.
    ///
    /// # Fields Updated
    /// Each field is replaced only when present (and, for strings, not blank);
    /// a replacement is checked with the same rule as on create.
    async fn on_update(
        &mut self,
        update: FilmUpdate,
        _peers: Peers<'_, Self>,
        _ctx: &Self::Context,
    ) -> Result<(), FilmError> {
        if let Some(name) = non_blank(update.name) {
            self.name = name;
        }
        if let Some(description) = non_blank(update.description) {
            validate_description(&description)?;
            self.description = description;
        }
        if let Some(release_date) = update.release_date {
            validate_release_date(release_date)?;
            self.release_date = release_date;
        }
        if let Some(duration) = update.duration {
            self.duration = validate_duration(duration)?;
        }
        Ok(())
    }
}

fn validate_description(description: &str) -> Result<(), FilmError> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(FilmError::validation(format!(
            "description must be at most {MAX_DESCRIPTION_LENGTH} characters, got {length}"
        )));
    }
    Ok(())
}

fn validate_release_date(release_date: NaiveDate) -> Result<(), FilmError> {
    let earliest = min_release_date();
    if release_date < earliest {
        return Err(FilmError::validation(format!(
            "release date must not be before {earliest}"
        )));
    }
    Ok(())
}

fn validate_duration(duration: i64) -> Result<u32, FilmError> {
    if duration <= 0 {
        return Err(FilmError::validation("duration must be a positive number"));
    }
    u32::try_from(duration).map_err(|_| FilmError::validation("duration is out of range"))
}
