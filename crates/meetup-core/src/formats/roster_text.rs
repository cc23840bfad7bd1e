//! # Text Roster Format
//!
//! One agent per line as `name:STATUS`:
//!
//! ```text
//! # comments and blank lines are skipped
//! Alice:CURE
//! Bob:sick
//! Dr. No: Yes:DYING
//! ```
//!
//! The status is whatever follows the last `:`, so names may contain colons.
//! Both parts are trimmed. Status names are case-insensitive.

use crate::{Agent, MeetupError, Roster, Status};

/// Marks a comment line.
const COMMENT_PREFIX: char = '#';

/// Separates the name from the status.
const FIELD_SEPARATOR: char = ':';

/// Parse a text roster and validate it.
pub fn parse_roster(text: &str) -> Result<Roster, MeetupError> {
    let mut agents = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let line_number = index + 1;
        let (name, status) = line
            .rsplit_once(FIELD_SEPARATOR)
            .ok_or_else(|| MeetupError::Parse {
                line: line_number,
                reason: format!("expected `name:STATUS`, got {:?}", line),
            })?;

        let status: Status = status.parse()?;
        let agent = Agent::new(name.trim(), status);
        agent.validate().map_err(|e| MeetupError::Parse {
            line: line_number,
            reason: e.to_string(),
        })?;

        agents.push(agent);
    }

    let roster = Roster::new(agents);
    roster.validate()?;
    Ok(roster)
}

/// Render agents in the text roster format, one per line.
#[must_use]
pub fn render_roster(agents: &[Agent]) -> String {
    agents
        .iter()
        .map(|agent| format!("{}{}{}\n", agent.name, FIELD_SEPARATOR, agent.status))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_comments_and_blanks() {
        let text = "# roster\nAlice:CURE\n\n  Bob : sick  \n";
        let roster = parse_roster(text).expect("parse");

        assert_eq!(
            roster.agents(),
            &[Agent::new("Alice", Status::Cure), Agent::new("Bob", Status::Sick)]
        );
    }

    #[test]
    fn name_may_contain_colons() {
        let roster = parse_roster("Dr. No: Yes:DYING").expect("parse");
        assert_eq!(roster.agents()[0].name, "Dr. No: Yes");
        assert_eq!(roster.agents()[0].status, Status::Dying);
    }

    #[test]
    fn missing_separator_reports_line() {
        let result = parse_roster("Alice:CURE\n\nBob SICK\n");
        assert!(matches!(result, Err(MeetupError::Parse { line: 3, .. })));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = parse_roster("Alice:UNDEAD");
        assert!(matches!(result, Err(MeetupError::UnknownStatus(s)) if s == "UNDEAD"));
    }

    #[test]
    fn empty_name_reports_line() {
        let result = parse_roster(":SICK");
        assert!(matches!(result, Err(MeetupError::Parse { line: 1, .. })));
    }

    #[test]
    fn render_then_parse() {
        let agents = vec![
            Agent::new("Alice", Status::Cure),
            Agent::new("Bob", Status::Dead),
        ];
        let text = render_roster(&agents);

        assert_eq!(text, "Alice:CURE\nBob:DEAD\n");
        assert_eq!(parse_roster(&text).expect("parse").into_agents(), agents);
    }
}
