//! University handlers
//!
//! CRUD over the universities collection. Writes validate field presence
//! before any storage access and apply the weak duplicate guard: a record
//! matching all six required fields already existing turns the write into
//! a 400.

use application::ports::{DeleteReport, UpdateReport};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use domain::University;
use serde::Deserialize;
use tracing::debug;

use crate::{error::ApiError, state::AppState};

use super::common::parse_object_id;

const MISSING_FIELDS: &str =
    "Please provide a name, location, website, image, description and score";
const ALREADY_EXISTS: &str = "University already exists";

/// Create/replace request body
///
/// Every field is optional at the deserialization layer so presence can
/// be checked explicitly; required fields must also be truthy (non-empty
/// strings, non-zero score).
#[derive(Debug, Deserialize)]
pub struct UniversityPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub session: Option<String>,
}

impl UniversityPayload {
    /// Validate presence and truthiness of the six required fields
    fn into_university(self) -> Result<University, ApiError> {
        let missing = || ApiError::BadRequest(MISSING_FIELDS.to_string());

        let name = self.name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let location = self.location.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let website = self.website.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let image = self.image.filter(|v| !v.is_empty()).ok_or_else(missing)?;
        let description = self
            .description
            .filter(|v| !v.is_empty())
            .ok_or_else(missing)?;
        // Zero counts as absent, like the other falsy values.
        let score = self.score.filter(|s| *s != 0.0).ok_or_else(missing)?;

        let mut university = University::new(name, location, website, image, description, score);
        if let Some(session) = self.session.filter(|v| !v.is_empty()) {
            university = university.with_session(session);
        }
        Ok(university)
    }
}

/// `GET /universities`
pub async fn list_universities(
    State(state): State<AppState>,
) -> Result<Json<Vec<University>>, ApiError> {
    let universities = state.universities.list().await?;
    Ok(Json(universities))
}

/// `GET /universities/{id}`
pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<University>, ApiError> {
    let oid = parse_object_id(&id)?;
    state.universities.get(oid).await?.map(Json).ok_or_else(|| {
        ApiError::NotFound(format!("University could not be found with id: {id}"))
    })
}

/// `POST /universities`
pub async fn create_university(
    State(state): State<AppState>,
    Json(payload): Json<UniversityPayload>,
) -> Result<(StatusCode, Json<University>), ApiError> {
    let mut university = payload.into_university()?;

    if state
        .universities
        .find_matching(&university)
        .await?
        .is_some()
    {
        return Err(ApiError::BadRequest(ALREADY_EXISTS.to_string()));
    }

    let report = state.universities.insert(&university).await?;
    university.id = Some(report.inserted_id);

    debug!(id = %report.inserted_id, "Created university");
    Ok((StatusCode::CREATED, Json(university)))
}

/// `PUT /universities/{id}`
pub async fn replace_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UniversityPayload>,
) -> Result<Json<UpdateReport>, ApiError> {
    let university = payload.into_university()?;

    // The duplicate guard runs before the id is even interpreted, and it
    // does not exempt the record being replaced.
    if state
        .universities
        .find_matching(&university)
        .await?
        .is_some()
    {
        return Err(ApiError::BadRequest(ALREADY_EXISTS.to_string()));
    }

    let oid = parse_object_id(&id)?;
    let report = state.universities.replace(oid, &university).await?;
    Ok(Json(report))
}

/// `DELETE /universities/{id}`
///
/// No existence check; the delete report is returned regardless.
pub async fn delete_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReport>, ApiError> {
    let oid = parse_object_id(&id)?;
    let report = state.universities.delete(oid).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> UniversityPayload {
        UniversityPayload {
            name: Some("Ghent University".to_string()),
            location: Some("Ghent".to_string()),
            website: Some("https://www.ugent.be".to_string()),
            image: Some("https://www.ugent.be/logo.png".to_string()),
            description: Some("Research university".to_string()),
            score: Some(92.5),
            session: None,
        }
    }

    #[test]
    fn full_payload_validates() {
        let university = full_payload().into_university().unwrap();
        assert_eq!(university.name, "Ghent University");
        assert!(university.id.is_none());
        assert!(university.session.is_none());
    }

    #[test]
    fn missing_field_is_rejected() {
        let payload = UniversityPayload {
            website: None,
            ..full_payload()
        };
        let result = payload.into_university();
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let payload = UniversityPayload {
            name: Some(String::new()),
            ..full_payload()
        };
        assert!(payload.into_university().is_err());
    }

    #[test]
    fn zero_score_counts_as_missing() {
        let payload = UniversityPayload {
            score: Some(0.0),
            ..full_payload()
        };
        assert!(payload.into_university().is_err());
    }

    #[test]
    fn session_is_carried_when_present() {
        let payload = UniversityPayload {
            session: Some("2022-2023".to_string()),
            ..full_payload()
        };
        let university = payload.into_university().unwrap();
        assert_eq!(university.session.as_deref(), Some("2022-2023"));
    }

    #[test]
    fn empty_session_is_dropped() {
        let payload = UniversityPayload {
            session: Some(String::new()),
            ..full_payload()
        };
        let university = payload.into_university().unwrap();
        assert!(university.session.is_none());
    }
}
