//! Featured speaker detection
//!
//! A speaker is featured at a conference when they present in two or more of
//! its sessions. Pure functions over a snapshot of sessions and speakers.

use std::collections::HashSet;

use shared::{ConferenceId, Session, Speaker};

/// Fixed lead-in of every non-empty announcement
pub const ANNOUNCEMENT_PREFIX: &str = "FEATURED SPEAKERS & SESSIONS ON THIS CONFERENCE -- ";

/// Minimum number of distinct sessions for a speaker to be featured
pub const FEATURED_SESSION_THRESHOLD: usize = 2;

/// One qualifying speaker with the sessions they present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedSpeaker {
    /// 1-based position among qualifying speakers
    pub rank: usize,
    pub name: String,
    /// Session names in the conference's session order
    pub sessions: Vec<String>,
}

/// Find featured speakers of `conference`, ordered by speaker name.
///
/// Sessions belonging to other conferences are ignored, as are speaker ids
/// that do not match any entry in `speakers`. Ties on name keep the input
/// order of `speakers`.
pub fn find_featured_speakers(
    conference: &ConferenceId,
    sessions: &[Session],
    speakers: &[Speaker],
) -> Vec<FeaturedSpeaker> {
    let conference_sessions: Vec<&Session> = sessions
        .iter()
        .filter(|session| &session.conference_id == conference)
        .collect();

    if conference_sessions.len() < FEATURED_SESSION_THRESHOLD {
        return Vec::new();
    }

    let mut ordered: Vec<&Speaker> = speakers.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name));

    let mut seen = HashSet::new();
    let mut featured = Vec::new();

    for speaker in ordered {
        if !seen.insert(&speaker.id) {
            continue;
        }

        let session_names: Vec<String> = conference_sessions
            .iter()
            .filter(|session| session.has_speaker(&speaker.id))
            .map(|session| session.name.clone())
            .collect();

        if session_names.len() >= FEATURED_SESSION_THRESHOLD {
            featured.push(FeaturedSpeaker {
                rank: featured.len() + 1,
                name: speaker.name.clone(),
                sessions: session_names,
            });
        }
    }

    featured
}

/// Render the announcement text; empty when nobody qualifies
pub fn render_announcement(featured: &[FeaturedSpeaker]) -> String {
    if featured.is_empty() {
        return String::new();
    }

    let mut text = String::from(ANNOUNCEMENT_PREFIX);
    for speaker in featured {
        text.push_str(&format!(
            " FEATURED {}: {} SESSIONS: {}",
            speaker.rank,
            speaker.name,
            speaker.sessions.join(", ")
        ));
    }
    text
}

/// Featured speaker announcement for one conference
pub fn evaluate(conference: &ConferenceId, sessions: &[Session], speakers: &[Speaker]) -> String {
    render_announcement(&find_featured_speakers(conference, sessions, speakers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SpeakerId;

    fn conf() -> ConferenceId {
        ConferenceId::from("c1")
    }

    fn session(name: &str, speakers: &[&str]) -> Session {
        Session::new(
            name.to_lowercase(),
            conf(),
            name,
            speakers.iter().map(|id| SpeakerId::from(*id)).collect(),
        )
    }

    fn cast() -> Vec<Speaker> {
        vec![
            Speaker::new("A", "Alice"),
            Speaker::new("B", "Bob"),
            Speaker::new("C", "Carl"),
        ]
    }

    #[test]
    fn test_reference_example() {
        let sessions = vec![
            session("S1", &["A", "B"]),
            session("S2", &["A"]),
            session("S3", &["A", "C"]),
        ];

        assert_eq!(
            evaluate(&conf(), &sessions, &cast()),
            "FEATURED SPEAKERS & SESSIONS ON THIS CONFERENCE --  FEATURED 1: Alice SESSIONS: S1, S2, S3"
        );
    }

    #[test]
    fn test_no_sessions_yields_empty() {
        assert_eq!(evaluate(&conf(), &[], &cast()), "");
    }

    #[test]
    fn test_single_session_speaker_is_not_featured() {
        let sessions = vec![session("S1", &["A", "B"]), session("S2", &["C"])];
        assert_eq!(evaluate(&conf(), &sessions, &cast()), "");
    }

    #[test]
    fn test_two_sessions_listed_in_session_order() {
        let sessions = vec![
            session("Zeta", &["B"]),
            session("Alpha", &["A"]),
            session("Mu", &["B"]),
        ];
        let featured = find_featured_speakers(&conf(), &sessions, &cast());
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "Bob");
        assert_eq!(featured[0].sessions, vec!["Zeta".to_string(), "Mu".to_string()]);
    }

    #[test]
    fn test_ordered_by_name_with_contiguous_ranks() {
        let sessions = vec![
            session("S1", &["C", "A", "B"]),
            session("S2", &["B", "C"]),
            session("S3", &["A"]),
        ];
        // Input order deliberately not alphabetical
        let speakers = vec![
            Speaker::new("C", "Carl"),
            Speaker::new("B", "Bob"),
            Speaker::new("A", "Alice"),
        ];

        let featured = find_featured_speakers(&conf(), &sessions, &speakers);
        let summary: Vec<(usize, &str)> = featured.iter().map(|f| (f.rank, f.name.as_str())).collect();
        assert_eq!(summary, vec![(1, "Alice"), (2, "Bob"), (3, "Carl")]);

        assert_eq!(
            render_announcement(&featured),
            "FEATURED SPEAKERS & SESSIONS ON THIS CONFERENCE --  \
             FEATURED 1: Alice SESSIONS: S1, S3 \
             FEATURED 2: Bob SESSIONS: S1, S2 \
             FEATURED 3: Carl SESSIONS: S1, S2"
        );
    }

    #[test]
    fn test_duplicate_listing_within_a_session_counts_once() {
        let sessions = vec![session("S1", &["A", "A"]), session("S2", &["B"])];
        assert_eq!(evaluate(&conf(), &sessions, &cast()), "");
    }

    #[test]
    fn test_unknown_speaker_ids_are_ignored() {
        let sessions = vec![
            session("S1", &["ghost", "A"]),
            session("S2", &["ghost", "A"]),
        ];
        let featured = find_featured_speakers(&conf(), &sessions, &cast());
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "Alice");
    }

    #[test]
    fn test_sessions_of_other_conferences_are_ignored() {
        let mut other = session("Elsewhere", &["A"]);
        other.conference_id = ConferenceId::from("c2");
        let sessions = vec![session("S1", &["A"]), other];
        assert_eq!(evaluate(&conf(), &sessions, &cast()), "");
    }

    #[test]
    fn test_name_ties_keep_input_order() {
        let sessions = vec![session("S1", &["x", "y"]), session("S2", &["y", "x"])];
        let speakers = vec![Speaker::new("y", "Sam"), Speaker::new("x", "Sam")];
        let featured = find_featured_speakers(&conf(), &sessions, &speakers);
        assert_eq!(featured.len(), 2);
        assert_eq!(featured[0].rank, 1);
        assert_eq!(featured[1].rank, 2);
        assert_eq!(featured[0].sessions, vec!["S1".to_string(), "S2".to_string()]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let sessions = vec![session("S1", &["A", "B"]), session("S2", &["A", "B"])];
        let first = evaluate(&conf(), &sessions, &cast());
        let second = evaluate(&conf(), &sessions, &cast());
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
