//! Websafe entity keys
//!
//! A key is an ancestor path such as `Profile:ada/Conference:42`. On the wire
//! it travels as URL-safe base64 without padding. Path separators inside ids
//! are escaped before encoding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Kinds of entity that can appear in a key path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Profile,
    Conference,
    Session,
    Speaker,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Profile => "Profile",
            EntityKind::Conference => "Conference",
            EntityKind::Session => "Session",
            EntityKind::Speaker => "Speaker",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        match s {
            "Profile" => Ok(EntityKind::Profile),
            "Conference" => Ok(EntityKind::Conference),
            "Session" => Ok(EntityKind::Session),
            "Speaker" => Ok(EntityKind::Speaker),
            other => Err(SharedError::UnknownKind { kind: other.to_string() }),
        }
    }
}

/// Full ancestor path of an entity, root first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    path: Vec<(EntityKind, String)>,
}

impl EntityKey {
    /// Root key with no parent
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            path: vec![(kind, id.into())],
        }
    }

    /// Key of a child entity under this one
    pub fn child(mut self, kind: EntityKind, id: impl Into<String>) -> Self {
        self.path.push((kind, id.into()));
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.last().0
    }

    pub fn id(&self) -> &str {
        &self.last().1
    }

    /// Parent key, if this is not a root key
    pub fn parent(&self) -> Option<EntityKey> {
        if self.path.len() < 2 {
            return None;
        }
        Some(Self {
            path: self.path[..self.path.len() - 1].to_vec(),
        })
    }

    /// Id of this key, provided its kind is `expected`
    pub fn id_of_kind(&self, expected: EntityKind) -> SharedResult<&str> {
        if self.kind() != expected {
            return Err(SharedError::KindMismatch {
                expected: expected.to_string(),
                found: self.kind().to_string(),
            });
        }
        Ok(self.id())
    }

    /// Organizer and id of a conference key.
    ///
    /// A conference key is either a root `Conference:<id>` or exactly
    /// `Profile:<organizer>/Conference:<id>`.
    pub fn conference_parts(&self) -> SharedResult<(Option<&str>, &str)> {
        let conference = self.id_of_kind(EntityKind::Conference)?;
        match self.path.as_slice() {
            [_] => Ok((None, conference)),
            [(EntityKind::Profile, organizer), _] => Ok((Some(organizer.as_str()), conference)),
            [(parent, _), _] => Err(SharedError::KindMismatch {
                expected: EntityKind::Profile.to_string(),
                found: parent.to_string(),
            }),
            _ => Err(SharedError::InvalidKey { input: self.to_string() }),
        }
    }

    /// Encode as a URL-safe string
    pub fn to_websafe(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.encoded_path())
    }

    /// Decode a URL-safe string produced by [`EntityKey::to_websafe`]
    pub fn from_websafe(websafe: &str) -> SharedResult<Self> {
        let invalid = || SharedError::InvalidKey { input: websafe.to_string() };

        let bytes = URL_SAFE_NO_PAD.decode(websafe.trim()).map_err(|_| invalid())?;
        let text = String::from_utf8(bytes).map_err(|_| invalid())?;
        if text.is_empty() {
            return Err(invalid());
        }

        let mut path = Vec::new();
        for segment in text.split('/') {
            let (kind, id) = segment.split_once(':').ok_or_else(invalid)?;
            if id.is_empty() {
                return Err(invalid());
            }
            path.push((kind.parse::<EntityKind>()?, unescape(id)));
        }

        Ok(Self { path })
    }

    fn last(&self) -> &(EntityKind, String) {
        // Every constructor pushes at least one segment
        &self.path[self.path.len() - 1]
    }

    fn encoded_path(&self) -> String {
        self.path
            .iter()
            .map(|(kind, id)| format!("{}:{}", kind, escape(id)))
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .path
            .iter()
            .map(|(kind, id)| format!("{kind}:{id}"))
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&rendered)
    }
}

fn escape(id: &str) -> String {
    id.replace('%', "%25").replace('/', "%2F")
}

fn unescape(id: &str) -> String {
    id.replace("%2F", "/").replace("%25", "%")
}
