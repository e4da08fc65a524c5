use std::collections::HashSet;

use actix_web::web;
use async_trait::async_trait;
use curl::easy::Easy;
use log::warn;
use serde_json::Value;
use thiserror::Error;

use super::member_model::Member;

/// Underlying cause of a failed fetch. Only ever logged, never shown.
#[derive(Error, Debug)]
pub enum FetchFailure {
    #[error("transport failure: {0}")]
    Transport(#[from] curl::Error),

    #[error("unexpected response status: {0}")]
    Status(u32),

    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to decode users payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("blocking worker failed")]
    Worker,
}

#[async_trait]
pub trait MemberSource: Send + Sync {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchFailure>;
}

pub struct CurlMemberSource {
    users_url: String,
}

impl CurlMemberSource {
    pub fn new(users_url: String) -> CurlMemberSource {
        CurlMemberSource { users_url }
    }
}

#[async_trait]
impl MemberSource for CurlMemberSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchFailure> {
        let url = self.users_url.clone();
        let body = web::block(move || get_users_body(&url))
            .await
            .map_err(|_| FetchFailure::Worker)??;
        parse_users_payload(&body)
    }
}

pub fn get_users_body(url: &str) -> Result<String, FetchFailure> {
    let mut output = Vec::new();
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.http_headers({
        let mut headers = curl::easy::List::new();
        headers.append("Accept: application/json")?;
        headers
    })?;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            output.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchFailure::Status(status));
    }
    Ok(String::from_utf8(output)?)
}

/// Members live under `data.users`; a missing or null path is an empty list.
pub fn parse_users_payload(body: &str) -> Result<Vec<Member>, FetchFailure> {
    let payload: Value = serde_json::from_str(body)?;
    let members: Vec<Member> = match payload.pointer("/data/users") {
        None | Some(Value::Null) => Vec::new(),
        Some(users) => serde_json::from_value(users.clone())?,
    };

    let mut seen = HashSet::new();
    for member in &members {
        if !seen.insert(member.id.as_str()) {
            warn!("Duplicate member id {} in users payload", member.id);
        }
    }
    Ok(members)
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::channel::oneshot;
    use parking_lot::Mutex;

    use super::*;

    pub enum Scripted {
        Ready(Result<Vec<Member>, FetchFailure>),
        Gated(oneshot::Receiver<Result<Vec<Member>, FetchFailure>>),
    }

    /// Replays canned outcomes in order, one per fetch.
    pub struct ScriptedSource {
        script: Mutex<VecDeque<Scripted>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        pub fn new(script: Vec<Scripted>) -> ScriptedSource {
            ScriptedSource {
                script: Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MemberSource for ScriptedSource {
        async fn fetch_members(&self) -> Result<Vec<Member>, FetchFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.script.lock().pop_front();
            match next {
                Some(Scripted::Ready(result)) => result,
                Some(Scripted::Gated(gate)) => gate.await.unwrap_or(Err(FetchFailure::Worker)),
                None => panic!("scripted source exhausted"),
            }
        }
    }

    pub fn member(id: &str, firstname: &str, lastname: &str, role: &str) -> Member {
        Member {
            id: id.to_string(),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            avatar: format!("https://example.com/{}.jpg", firstname.to_lowercase()),
            role: role.to_string(),
            description: format!("This is {} {}, a great {}.", firstname, lastname, role.to_lowercase()),
            email: format!("{}.{}@example.com", firstname.to_lowercase(), lastname.to_lowercase()),
            username: format!("{}{}", firstname.to_lowercase(), lastname.to_lowercase()),
            join_date: "2023-01-15".to_string(),
        }
    }

    pub fn two_members() -> Vec<Member> {
        vec![
            member("1", "John", "Doe", "Engineer"),
            member("2", "Jane", "Smith", "Designer"),
        ]
    }
}
