//! `find KEYWORD [MORE_KEYWORDS]...`

use crate::commands::word::FIND_USAGE;
use crate::commands::Command;
use crate::error::ParseError;
use crate::model::NameContainsKeywords;

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(FIND_USAGE));
    }
    Ok(Command::Find(NameContainsKeywords::new(keywords)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("   "), Err(ParseError::InvalidFormat(FIND_USAGE)));
    }

    #[test]
    fn test_parse_keywords_collapse_whitespace() {
        let expected = Command::Find(NameContainsKeywords::new(vec![
            "Alice".to_string(),
            "Bob".to_string(),
        ]));
        assert_eq!(parse(" Alice Bob"), Ok(expected.clone()));
        assert_eq!(parse(" \n Alice \n \t Bob  \t"), Ok(expected));
    }
}
