use log::error;
use thiserror::Error;

use super::{member_model::Member, member_utils::MemberSource};

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch users. Please try again later.";

/// The only error the rest of the directory ever sees from a fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch users. Please try again later.")]
pub struct FetchError;

pub async fn fetch_members(source: &dyn MemberSource) -> Result<Vec<Member>, FetchError> {
    source.fetch_members().await.map_err(|cause| {
        error!("Error fetching users: {}", cause);
        FetchError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dir_member::member_utils::{
        testing::{two_members, Scripted, ScriptedSource},
        FetchFailure,
    };

    #[test]
    fn test_message_matches_constant() {
        assert_eq!(FetchError.to_string(), FETCH_ERROR_MESSAGE);
    }

    #[actix_rt::test]
    async fn test_success_passes_members_through() {
        let source = ScriptedSource::new(vec![Scripted::Ready(Ok(two_members()))]);
        let members = fetch_members(&source).await.unwrap();
        assert_eq!(members, two_members());
    }

    #[actix_rt::test]
    async fn test_every_cause_maps_to_uniform_error() {
        let source = ScriptedSource::new(vec![
            Scripted::Ready(Err(FetchFailure::Status(503))),
            Scripted::Ready(Err(FetchFailure::Worker)),
            Scripted::Ready(Err(FetchFailure::Decode(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))),
        ]);
        for _ in 0..3 {
            let err = fetch_members(&source).await.unwrap_err();
            assert_eq!(err.to_string(), FETCH_ERROR_MESSAGE);
        }
        assert_eq!(source.calls(), 3);
    }
}
